//! Table emitters. Each writes one tab-separated file, one record per
//! line, no header row, then moves on; no emitter reads another's
//! output, and all row ids come straight from the loop counters.

use std::fs::File;
use std::path::{Path, PathBuf};

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::info;

use crate::fields::{self, make_person};
use crate::pair_sampler::sample_unique_pairs;
use crate::scale::{Scale, MAX_STREET_LENGTH};
use crate::vocab;

/// A failed output sink is fatal for the whole run; partial files are
/// left in place.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to create output file {path}")]
    Create {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to write record to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// One open tab-separated output file. Values are written verbatim
/// (no quoting or escaping), relying on the vocabulary precondition
/// that no field contains a tab or newline.
struct TableSink {
    path: PathBuf,
    writer: csv::Writer<File>,
}

impl TableSink {
    fn create(path: &Path) -> Result<Self, SinkError> {
        let writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(csv::QuoteStyle::Never)
            .from_path(path)
            .map_err(|source| SinkError::Create {
                path: path.to_owned(),
                source,
            })?;
        Ok(Self {
            path: path.to_owned(),
            writer,
        })
    }

    fn write<I, T>(&mut self, record: I) -> Result<(), SinkError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.writer
            .write_record(record)
            .map_err(|source| SinkError::Write {
                path: self.path.clone(),
                source,
            })
    }

    fn finish(mut self) -> Result<(), SinkError> {
        self.writer.flush().map_err(|source| SinkError::Write {
            path: self.path.clone(),
            source: csv::Error::from(source),
        })
    }
}

/// Generates every table of the synthetic hospital dataset from one
/// scale factor and one random stream.
pub struct Generator {
    rng: ChaCha8Rng,
    scale: Scale,
}

impl Generator {
    pub fn new(scale: Scale, rng: ChaCha8Rng) -> Self {
        Self { rng, scale }
    }

    /// Generate all nine tables into `out_dir`, using the standard
    /// file names expected by the bulk-import script. Voter ids start
    /// above the patient id range.
    pub fn write_all(&mut self, out_dir: &Path) -> Result<(), SinkError> {
        let rows = self.write_patient_table(&out_dir.join("tablePatient.txt"))?;
        info!(rows, "wrote tablePatient.txt");
        let rows = self.write_disease_table(&out_dir.join("tableDisease.txt"))?;
        info!(rows, "wrote tableDisease.txt");
        let rows = self.write_doctor_table(&out_dir.join("tableDoctor.txt"))?;
        info!(rows, "wrote tableDoctor.txt");
        let rows = self.write_sees_table(&out_dir.join("tableSees.txt"))?;
        info!(rows, "wrote tableSees.txt");
        let rows = self.write_product_table(&out_dir.join("tableProduct.txt"))?;
        info!(rows, "wrote tableProduct.txt");
        let rows = self.write_stock_table(&out_dir.join("tableStock.txt"))?;
        info!(rows, "wrote tableStock.txt");
        let rows = self.write_supplier_table(&out_dir.join("tableSupplier.txt"))?;
        info!(rows, "wrote tableSupplier.txt");
        let rows = self.write_supplies_table(&out_dir.join("tableSupplies.txt"))?;
        info!(rows, "wrote tableSupplies.txt");
        let rows = self.write_voter_table(&out_dir.join("tableHealthyVoter.txt"), true)?;
        info!(rows, "wrote tableHealthyVoter.txt");
        Ok(())
    }

    /// Patient table: id, firstName, lastName, age, street, city, zip.
    pub fn write_patient_table(&mut self, path: &Path) -> Result<u64, SinkError> {
        let mut sink = TableSink::create(path)?;
        let count = self.scale.count_patients();
        for id in 1..=count {
            let person = make_person(&mut self.rng, id);
            let age = fields::make_patient_age(&mut self.rng);
            let address = fields::make_address(&mut self.rng, &self.scale, MAX_STREET_LENGTH);
            sink.write([
                id.to_string(),
                person.first_name,
                person.last_name,
                age.to_string(),
                address.street,
                address.city,
                address.zip.to_string(),
            ])?;
        }
        sink.finish()?;
        Ok(count)
    }

    /// Disease table: patientId, diseaseName. Duplicate pairs are
    /// discarded during sampling, so the row count can fall short of
    /// the attempt target.
    pub fn write_disease_table(&mut self, path: &Path) -> Result<u64, SinkError> {
        let mut sink = TableSink::create(path)?;
        let emitted = sample_unique_pairs(
            &mut self.rng,
            self.scale.count_patients(),
            vocab::DISEASES.len() as u64,
            self.scale.total_diseases(),
            |patient_id, disease_id| {
                let disease = vocab::DISEASES[(disease_id - 1) as usize];
                sink.write([patient_id.to_string(), disease.to_string()])
            },
        )?;
        sink.finish()?;
        Ok(emitted)
    }

    /// Doctor table: id, firstName, lastName, specialty.
    pub fn write_doctor_table(&mut self, path: &Path) -> Result<u64, SinkError> {
        let mut sink = TableSink::create(path)?;
        let count = self.scale.count_doctors();
        for id in 1..=count {
            let person = make_person(&mut self.rng, id);
            let specialty = vocab::SPECIALTIES[self.rng.gen_range(0..vocab::SPECIALTIES.len())];
            sink.write([
                id.to_string(),
                person.first_name,
                person.last_name,
                specialty.to_string(),
            ])?;
        }
        sink.finish()?;
        Ok(count)
    }

    /// Sees table: patientId, doctorId, deduplicated.
    pub fn write_sees_table(&mut self, path: &Path) -> Result<u64, SinkError> {
        let mut sink = TableSink::create(path)?;
        let emitted = sample_unique_pairs(
            &mut self.rng,
            self.scale.count_patients(),
            self.scale.count_doctors(),
            self.scale.total_sees(),
            |patient_id, doctor_id| sink.write([patient_id.to_string(), doctor_id.to_string()]),
        )?;
        sink.finish()?;
        Ok(emitted)
    }

    /// Product table: id, description. One row per vocabulary entry,
    /// no randomness.
    pub fn write_product_table(&mut self, path: &Path) -> Result<u64, SinkError> {
        let mut sink = TableSink::create(path)?;
        for (index, description) in vocab::PRODUCT_DESCRIPTIONS.iter().enumerate() {
            sink.write([(index + 1).to_string(), description.to_string()])?;
        }
        sink.finish()?;
        Ok(vocab::PRODUCT_DESCRIPTIONS.len() as u64)
    }

    /// Stock table: productId, quantity in 1..=maxStock.
    pub fn write_stock_table(&mut self, path: &Path) -> Result<u64, SinkError> {
        let mut sink = TableSink::create(path)?;
        for index in 0..vocab::PRODUCT_DESCRIPTIONS.len() {
            let quantity = self.rng.gen_range(1..=self.scale.max_stock());
            sink.write([(index + 1).to_string(), quantity.to_string()])?;
        }
        sink.finish()?;
        Ok(vocab::PRODUCT_DESCRIPTIONS.len() as u64)
    }

    /// Supplier table: id, name, street, city, zip. One row per
    /// vocabulary entry with a freshly randomized address.
    pub fn write_supplier_table(&mut self, path: &Path) -> Result<u64, SinkError> {
        let mut sink = TableSink::create(path)?;
        for (index, name) in vocab::SUPPLIER_NAMES.iter().enumerate() {
            let address = fields::make_address(&mut self.rng, &self.scale, MAX_STREET_LENGTH);
            sink.write([
                (index + 1).to_string(),
                name.to_string(),
                address.street,
                address.city,
                address.zip.to_string(),
            ])?;
        }
        sink.finish()?;
        Ok(vocab::SUPPLIER_NAMES.len() as u64)
    }

    /// Supplies table: productId, supplierId, deduplicated. The right
    /// domain is tiny, so heavy collision loss is expected here.
    pub fn write_supplies_table(&mut self, path: &Path) -> Result<u64, SinkError> {
        let mut sink = TableSink::create(path)?;
        let emitted = sample_unique_pairs(
            &mut self.rng,
            vocab::PRODUCT_DESCRIPTIONS.len() as u64,
            vocab::SUPPLIER_NAMES.len() as u64,
            self.scale.total_supplies(),
            |product_id, supplier_id| {
                sink.write([product_id.to_string(), supplier_id.to_string()])
            },
        )?;
        sink.finish()?;
        Ok(emitted)
    }

    /// Voter table: "firstName (id)", lastName, age, zip. There is no
    /// separate id column; the id is only the tag inside the first
    /// name. When `disjoint_with_patients` is set, ids start above the
    /// patient id range so both tables can share an identifier space
    /// after loading. This is advisory only; nothing checks for
    /// overlap.
    pub fn write_voter_table(
        &mut self,
        path: &Path,
        disjoint_with_patients: bool,
    ) -> Result<u64, SinkError> {
        let min_id = if disjoint_with_patients {
            self.scale.count_patients() + 1
        } else {
            1
        };
        self.write_voter_table_from(path, min_id)
    }

    /// Voter table with an explicit starting id. The id range is
    /// inclusive on both ends, giving countVoters + 1 rows.
    pub fn write_voter_table_from(&mut self, path: &Path, min_id: u64) -> Result<u64, SinkError> {
        let mut sink = TableSink::create(path)?;
        let mut rows = 0;
        for id in min_id..=min_id + self.scale.count_voters() {
            let person = make_person(&mut self.rng, id);
            let age = fields::make_voter_age(&mut self.rng);
            let zip = fields::make_zip_code(&mut self.rng);
            sink.write([
                person.first_name,
                person.last_name,
                age.to_string(),
                zip.to_string(),
            ])?;
            rows += 1;
        }
        sink.finish()?;
        Ok(rows)
    }
}
