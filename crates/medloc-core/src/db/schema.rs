//! SQLite schema definition.

/// Seed store schema: catalog, pharmacies and inventory.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Medicine Catalog
-- ============================================================================

CREATE TABLE IF NOT EXISTS medicines (
    id INTEGER PRIMARY KEY,
    position INTEGER NOT NULL,                    -- catalog order, decides match ties
    brand_name TEXT NOT NULL,
    generic_name TEXT NOT NULL,
    strength TEXT NOT NULL DEFAULT '',
    form TEXT NOT NULL DEFAULT '',
    usage TEXT NOT NULL DEFAULT '',
    side_effects TEXT NOT NULL DEFAULT '',
    substitutes TEXT NOT NULL DEFAULT '[]'        -- JSON array of medicine ids
);

CREATE INDEX IF NOT EXISTS idx_medicines_position ON medicines(position);

-- ============================================================================
-- Pharmacies
-- ============================================================================

CREATE TABLE IF NOT EXISTS pharmacies (
    id INTEGER PRIMARY KEY,
    position INTEGER NOT NULL,                    -- listing order, decides ranking ties
    name TEXT NOT NULL,
    lat REAL NOT NULL,
    lon REAL NOT NULL,
    address TEXT NOT NULL DEFAULT '',
    open_24h INTEGER NOT NULL DEFAULT 0,
    rating REAL NOT NULL DEFAULT 0 CHECK (rating >= 0 AND rating <= 5),
    services TEXT NOT NULL DEFAULT '[]'           -- JSON array of strings
);

CREATE INDEX IF NOT EXISTS idx_pharmacies_position ON pharmacies(position);

-- ============================================================================
-- Inventory
-- ============================================================================

CREATE TABLE IF NOT EXISTS inventory (
    pharmacy_id INTEGER NOT NULL REFERENCES pharmacies(id) ON DELETE CASCADE,
    medicine_id INTEGER NOT NULL REFERENCES medicines(id) ON DELETE CASCADE,
    price REAL NOT NULL CHECK (price >= 0),
    stock_level INTEGER NOT NULL,
    PRIMARY KEY (pharmacy_id, medicine_id)
);

CREATE INDEX IF NOT EXISTS idx_inventory_medicine ON inventory(medicine_id);
"#;
