//! Seeding and loading the reference dataset.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbError, DbResult};
use crate::dataset::Dataset;
use crate::models::{Inventory, Medicine, Pharmacy, StockLevel};

impl Database {
    /// Replace the stored dataset with `dataset`, in one transaction.
    ///
    /// The dataset is validated first; list order is kept so catalog ties
    /// resolve the same way after a reload.
    pub fn seed_dataset(&mut self, dataset: &Dataset) -> DbResult<()> {
        dataset
            .validate()
            .map_err(|e| DbError::Constraint(e.to_string()))?;

        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM inventory", [])?;
        tx.execute("DELETE FROM pharmacies", [])?;
        tx.execute("DELETE FROM medicines", [])?;

        for (position, med) in dataset.medicines.iter().enumerate() {
            let substitutes_json = serde_json::to_string(&med.substitutes)?;
            tx.execute(
                r#"
                INSERT INTO medicines (
                    id, position, brand_name, generic_name, strength,
                    form, usage, side_effects, substitutes
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                "#,
                params![
                    med.id,
                    position as i64,
                    med.brand,
                    med.generic,
                    med.strength,
                    med.form,
                    med.usage,
                    med.side_effects,
                    substitutes_json,
                ],
            )?;
        }

        for (position, pharmacy) in dataset.pharmacies.iter().enumerate() {
            let services_json = serde_json::to_string(&pharmacy.services)?;
            tx.execute(
                r#"
                INSERT INTO pharmacies (
                    id, position, name, lat, lon, address, open_24h, rating, services
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                "#,
                params![
                    pharmacy.id,
                    position as i64,
                    pharmacy.name,
                    pharmacy.lat,
                    pharmacy.lon,
                    pharmacy.address,
                    pharmacy.open_24h,
                    pharmacy.rating,
                    services_json,
                ],
            )?;
        }

        for (pharmacy_id, medicine_id, level) in dataset.inventory.iter() {
            tx.execute(
                r#"
                INSERT INTO inventory (pharmacy_id, medicine_id, price, stock_level)
                VALUES (?1, ?2, ?3, ?4)
                "#,
                params![pharmacy_id, medicine_id, level.price, level.stock],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Load the stored dataset in its seeded order.
    pub fn load_dataset(&self) -> DbResult<Dataset> {
        let medicines = self
            .conn
            .prepare(
                r#"
                SELECT id, brand_name, generic_name, strength, form,
                       usage, side_effects, substitutes
                FROM medicines
                ORDER BY position
                "#,
            )?
            .query_map([], MedicineRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(MedicineRow::into_medicine)
            .collect::<DbResult<Vec<_>>>()?;

        let pharmacies = self
            .conn
            .prepare(
                r#"
                SELECT id, name, lat, lon, address, open_24h, rating, services
                FROM pharmacies
                ORDER BY position
                "#,
            )?
            .query_map([], PharmacyRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(PharmacyRow::into_pharmacy)
            .collect::<DbResult<Vec<_>>>()?;

        let mut inventory = Inventory::new();
        let mut stmt = self
            .conn
            .prepare("SELECT pharmacy_id, medicine_id, price, stock_level FROM inventory")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, u32>(0)?,
                row.get::<_, u32>(1)?,
                StockLevel {
                    price: row.get(2)?,
                    stock: row.get(3)?,
                },
            ))
        })?;
        for row in rows {
            let (pharmacy_id, medicine_id, level) = row?;
            inventory.insert(pharmacy_id, medicine_id, level);
        }

        Ok(Dataset::new(medicines, pharmacies, inventory))
    }

    /// Get a medicine by id.
    pub fn get_medicine(&self, id: u32) -> DbResult<Medicine> {
        self.conn
            .query_row(
                r#"
                SELECT id, brand_name, generic_name, strength, form,
                       usage, side_effects, substitutes
                FROM medicines
                WHERE id = ?
                "#,
                [id],
                MedicineRow::from_row,
            )
            .optional()?
            .ok_or_else(|| DbError::NotFound(format!("medicine {}", id)))?
            .into_medicine()
    }

    /// Number of medicines in the catalog.
    pub fn medicine_count(&self) -> DbResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM medicines", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Number of pharmacies.
    pub fn pharmacy_count(&self) -> DbResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM pharmacies", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// Raw medicine row with JSON columns still encoded.
struct MedicineRow {
    id: u32,
    brand: String,
    generic: String,
    strength: String,
    form: String,
    usage: String,
    side_effects: String,
    substitutes: String,
}

impl MedicineRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            brand: row.get(1)?,
            generic: row.get(2)?,
            strength: row.get(3)?,
            form: row.get(4)?,
            usage: row.get(5)?,
            side_effects: row.get(6)?,
            substitutes: row.get(7)?,
        })
    }

    fn into_medicine(self) -> DbResult<Medicine> {
        Ok(Medicine {
            id: self.id,
            brand: self.brand,
            generic: self.generic,
            strength: self.strength,
            form: self.form,
            usage: self.usage,
            side_effects: self.side_effects,
            substitutes: serde_json::from_str(&self.substitutes)?,
        })
    }
}

/// Raw pharmacy row with JSON columns still encoded.
struct PharmacyRow {
    id: u32,
    name: String,
    lat: f64,
    lon: f64,
    address: String,
    open_24h: bool,
    rating: f64,
    services: String,
}

impl PharmacyRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            lat: row.get(2)?,
            lon: row.get(3)?,
            address: row.get(4)?,
            open_24h: row.get(5)?,
            rating: row.get(6)?,
            services: row.get(7)?,
        })
    }

    fn into_pharmacy(self) -> DbResult<Pharmacy> {
        Ok(Pharmacy {
            id: self.id,
            name: self.name,
            lat: self.lat,
            lon: self.lon,
            address: self.address,
            open_24h: self.open_24h,
            rating: self.rating,
            services: serde_json::from_str(&self.services)?,
        })
    }
}
