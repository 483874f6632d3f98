use serde::{Deserialize, Serialize};

/// A garment type with fixed stock counts per sex. Stock is capacity,
/// not live availability. Models are created and deleted, never edited.
///
/// Field names on the wire are the store's Spanish keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Store-assigned; `None` until the store has persisted the draft.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "stock_hombres")]
    pub stock_men: u32,
    #[serde(rename = "stock_mujeres")]
    pub stock_women: u32,
}

impl Model {
    pub fn draft(name: impl Into<String>, stock_men: u32, stock_women: u32) -> Self {
        Self {
            id: None,
            name: name.into(),
            stock_men,
            stock_women,
        }
    }
}

/// A booking of model units for one calendar day and one renter.
///
/// `total` is computed by the store and never sent on create; `id` is
/// store-assigned. An empty `model_id` means no model was referenced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// `YYYY-MM-DD`, matched exactly by the store's date filter.
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "n_contacto")]
    pub contact: String,
    #[serde(rename = "nombre_colegio")]
    pub school: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "tipo_baile")]
    pub dance_type: String,
    #[serde(rename = "modelo_id")]
    pub model_id: String,
    /// Denormalized copy of the model's name, kept for display.
    #[serde(rename = "modelo_nombre", default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(rename = "valor_arriendo")]
    pub rental_price: u64,
    #[serde(rename = "hombres")]
    pub men: u32,
    #[serde(rename = "mujeres")]
    pub women: u32,
    #[serde(rename = "valor_adicional")]
    pub additional_charge: u64,
    #[serde(rename = "adicionales", default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<String>,
    #[serde(rename = "horario_presentacion", default, skip_serializing_if = "Option::is_none")]
    pub show_time: Option<String>,
    #[serde(rename = "delivery", default, skip_serializing_if = "Option::is_none")]
    pub delivery_fee: Option<u64>,
    #[serde(rename = "abono", default, skip_serializing_if = "Option::is_none")]
    pub deposit: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// Response body of `POST /api/models`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedModel {
    pub id: String,
}

/// Response body of `POST /api/reservas`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedReservation {
    pub id: String,
    pub total: u64,
}
