//! Price override reconciliation - fetch the remote price sheet, sanitize
//! its loosely-typed rows against the catalog, and merge the result back
//! onto the dishes.

use crate::dishes::{Dish, PriceField};
use crate::error::{MenuError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Default sheet endpoint backing the live price table.
pub const DEFAULT_SHEET_URL: &str =
    "https://api.sheetbest.com/sheets/52cc8a8f-0d22-483f-8535-5768920babcd";

/// Validated price corrections for a single dish. A `None` field means
/// "no override for this field", never "clear the price".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_shot: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_glass: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_half: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_whole: Option<f64>,
}

impl PriceOverride {
    pub fn get(&self, field: PriceField) -> Option<f64> {
        match field {
            PriceField::Price => self.price,
            PriceField::PriceShot => self.price_shot,
            PriceField::PriceGlass => self.price_glass,
            PriceField::PriceHalf => self.price_half,
            PriceField::PriceWhole => self.price_whole,
        }
    }

    pub fn set(&mut self, field: PriceField, value: f64) {
        match field {
            PriceField::Price => self.price = Some(value),
            PriceField::PriceShot => self.price_shot = Some(value),
            PriceField::PriceGlass => self.price_glass = Some(value),
            PriceField::PriceHalf => self.price_half = Some(value),
            PriceField::PriceWhole => self.price_whole = Some(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        PriceField::ALL.iter().all(|f| self.get(*f).is_none())
    }
}

/// Sanitized overrides keyed by dish id. Only catalog-known ids with at
/// least one valid field appear here. Rebuilt on every fetch.
pub type PricesMap = HashMap<String, PriceOverride>;

/// Strict numeric parsing for sheet cells.
///
/// Accepts JSON numbers and numeric strings; null, empty or whitespace-only
/// strings, non-numeric strings, non-finite values and negatives all parse
/// to `None`. Valid values are rounded to 2 decimals with f64 `round()`
/// (half away from zero), so a re-fetch never drifts a displayed price.
pub fn parse_number_strict(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };

    if !n.is_finite() || n < 0.0 {
        return None;
    }

    Some((n * 100.0).round() / 100.0)
}

/// Sanitize raw sheet rows against the catalog.
///
/// Rows with a missing or non-string id, or an id the catalog does not
/// know, are dropped. Fields that fail [`parse_number_strict`] are omitted
/// from the row's override; rows left with no valid field are dropped so
/// the map never holds spurious empty entries.
pub fn sanitize_sheet_rows(rows: &[Value], dishes: &[Dish]) -> PricesMap {
    let valid_ids: HashSet<&str> = dishes.iter().map(|d| d.id.as_str()).collect();
    let mut out = PricesMap::new();

    for row in rows {
        let id = match row.get("id").and_then(Value::as_str) {
            Some(id) => id,
            None => continue,
        };
        if !valid_ids.contains(id) {
            debug!("Skipping sheet row with unknown id: {}", id);
            continue;
        }

        let mut overrides = PriceOverride::default();
        for field in PriceField::ALL {
            if let Some(cell) = row.get(field.as_str()) {
                if let Some(n) = parse_number_strict(cell) {
                    overrides.set(field, n);
                }
            }
        }

        if !overrides.is_empty() {
            out.insert(id.to_string(), overrides);
        }
    }

    out
}

/// Client for the spreadsheet-backed price endpoint.
pub struct SheetClient {
    base_url: String,
}

impl SheetClient {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_SHEET_URL.to_string(),
        }
    }

    pub fn with_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Fetch the sheet and sanitize it against `dishes`.
    ///
    /// Every call hits the endpoint with a fresh timestamp token so the
    /// response can never come from a stale cache. A non-success status is
    /// a [`MenuError::Fetch`]; a decoded body that is not a JSON array
    /// counts as zero rows.
    pub async fn fetch_prices_map(&self, dishes: &[Dish]) -> Result<PricesMap> {
        let url = format!(
            "{}?t={}",
            self.base_url,
            chrono::Utc::now().timestamp_millis()
        );

        let client = reqwest::Client::new();
        let response = client
            .get(&url)
            .header("Cache-Control", "no-store")
            .send()
            .await
            .map_err(|e| MenuError::Fetch(format!("Sheet request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(MenuError::Fetch(format!(
                "Failed to fetch prices: {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| MenuError::Fetch(format!("Failed to decode sheet response: {}", e)))?;

        let rows = match body.as_array() {
            Some(rows) => rows,
            None => {
                debug!("Sheet response is not an array, treating as empty");
                return Ok(PricesMap::new());
            }
        };

        Ok(sanitize_sheet_rows(rows, dishes))
    }
}

impl Default for SheetClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply a sanitized override map onto the catalog.
///
/// Pure, field-local shallow merge: only fields present in a dish's
/// override are replaced, every other field keeps its base value. Output
/// order and count match the input exactly; the base slice is not touched.
pub fn apply_price_overrides(dishes: &[Dish], prices: &PricesMap) -> Vec<Dish> {
    dishes
        .iter()
        .map(|dish| {
            let overrides = match prices.get(&dish.id) {
                Some(o) => o,
                None => return dish.clone(),
            };
            let mut merged = dish.clone();
            for field in PriceField::ALL {
                if let Some(value) = overrides.get(field) {
                    merged.set_price_field(field, value);
                }
            }
            merged
        })
        .collect()
}
