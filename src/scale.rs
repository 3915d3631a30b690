//! The scale model: one integer that drives every derived row count.

use crate::vocab;

/// Default value of the scale if not specified.
pub const DEFAULT_SCALE: u32 = 20;

/// Maximum patient age; patient ages are uniform in 1..=MAX_AGE and
/// voter ages uniform in 0..=MAX_AGE.
pub const MAX_AGE: u32 = 100;

/// Max length of a street address in the target SQL schema.
pub const MAX_STREET_LENGTH: usize = 20;

const MAX_STOCK: u32 = 2000;
const MAX_STREET_NUMBER: u32 = 300;

// Some people might be seeing the same doctor for multiple ailments
const AVG_DISEASES_PER_PATIENT: f64 = 1.4;
const AVG_DOCTORS_PER_PATIENT: f64 = 1.2;
const AVG_SUPPLIERS_PER_PRODUCT: f64 = 3.1;

/// Scales the number of rows in each table, among other things.
///
/// All derived counts are closed-form functions of the scale factor
/// and fixed constants, so changing the scale never requires touching
/// any other component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale(u32);

impl Scale {
    pub fn new(scale: u32) -> Self {
        Self(scale)
    }

    pub fn count_patients(&self) -> u64 {
        1000 * u64::from(self.0)
    }

    pub fn count_voters(&self) -> u64 {
        10000 * u64::from(self.0)
    }

    pub fn count_doctors(&self) -> u64 {
        50 * u64::from(self.0)
    }

    /// Target number of (patient, disease) sampling attempts. The
    /// emitted table may hold fewer rows because duplicate pairs are
    /// discarded.
    pub fn total_diseases(&self) -> u64 {
        (self.count_patients() as f64 * AVG_DISEASES_PER_PATIENT).round() as u64
    }

    /// Target number of (patient, doctor) sampling attempts.
    pub fn total_sees(&self) -> u64 {
        (self.count_patients() as f64 * AVG_DOCTORS_PER_PATIENT).round() as u64
    }

    /// Target number of (product, supplier) sampling attempts, an
    /// average of suppliers per product. Driven by the product
    /// vocabulary size, not by the scale factor.
    pub fn total_supplies(&self) -> u64 {
        (vocab::PRODUCT_DESCRIPTIONS.len() as f64 * AVG_SUPPLIERS_PER_PRODUCT).round() as u64
    }

    pub fn max_street_number(&self) -> u32 {
        MAX_STREET_NUMBER
    }

    pub fn max_house_number(&self) -> u32 {
        100 * self.max_street_number()
    }

    pub fn max_stock(&self) -> u32 {
        MAX_STOCK
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(DEFAULT_SCALE)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn counts_at_scale_one() {
        let scale = Scale::new(1);
        assert_eq!(scale.count_patients(), 1000);
        assert_eq!(scale.count_doctors(), 50);
        assert_eq!(scale.count_voters(), 10000);
        assert_eq!(scale.total_diseases(), 1400);
        assert_eq!(scale.total_sees(), 1200);
        // 19 products * 3.1 suppliers per product, rounded
        assert_eq!(scale.total_supplies(), 59);
    }

    #[test]
    fn counts_scale_linearly() {
        let scale = Scale::new(20);
        assert_eq!(scale.count_patients(), 20_000);
        assert_eq!(scale.count_doctors(), 1000);
        assert_eq!(scale.count_voters(), 200_000);
        assert_eq!(scale.total_diseases(), 28_000);
        assert_eq!(scale.total_sees(), 24_000);
    }

    #[test]
    fn supplies_target_ignores_scale() {
        assert_eq!(Scale::new(1).total_supplies(), Scale::new(50).total_supplies());
    }

    #[test]
    fn supplies_target_derives_from_product_vocabulary() {
        // attempts average 3.1 suppliers per *product*, so the target
        // follows the product list, not the supplier list
        let expected =
            (crate::vocab::PRODUCT_DESCRIPTIONS.len() as f64 * 3.1).round() as u64;
        assert_eq!(Scale::new(1).total_supplies(), expected);
        assert_eq!(Scale::new(1).total_supplies(), 59);
    }

    #[test]
    fn fixed_bounds() {
        let scale = Scale::default();
        assert_eq!(scale.max_street_number(), 300);
        assert_eq!(scale.max_house_number(), 30_000);
        assert_eq!(scale.max_stock(), 2000);
    }
}
