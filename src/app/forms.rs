use crate::domain::{Model, Reservation};
use tui_input::Input;

/// Parses a head-count field: empty means zero, anything that is not a
/// non-negative whole number is rejected before the round trip.
fn parse_count(label: &str, raw: &str) -> Result<u32, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse()
        .map_err(|_| format!("{} must be a non-negative whole number", label))
}

fn parse_amount(label: &str, raw: &str) -> Result<u64, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse()
        .map_err(|_| format!("{} must be a non-negative whole number", label))
}

fn optional_text(input: &Input) -> Option<String> {
    let value = input.value().trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn optional_amount(label: &str, input: &Input) -> Result<Option<u64>, String> {
    let value = input.value().trim();
    if value.is_empty() {
        return Ok(None);
    }
    parse_amount(label, value).map(Some)
}

/// New-model form: name plus per-sex stock.
#[derive(Default)]
pub struct ModelForm {
    pub name: Input,
    pub stock_men: Input,
    pub stock_women: Input,
    pub focus: usize,
}

impl ModelForm {
    pub const FIELDS: usize = 3;

    pub fn labels() -> [&'static str; Self::FIELDS] {
        ["Name", "Stock men", "Stock women"]
    }

    pub fn input_at(&self, index: usize) -> &Input {
        match index {
            0 => &self.name,
            1 => &self.stock_men,
            _ => &self.stock_women,
        }
    }

    pub fn focused_input_mut(&mut self) -> &mut Input {
        match self.focus {
            0 => &mut self.name,
            1 => &mut self.stock_men,
            _ => &mut self.stock_women,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % Self::FIELDS;
    }

    pub fn prev_field(&mut self) {
        self.focus = (self.focus + Self::FIELDS - 1) % Self::FIELDS;
    }

    pub fn reset(&mut self) {
        self.name.reset();
        self.stock_men.reset();
        self.stock_women.reset();
        self.focus = 0;
    }

    pub fn draft(&self) -> Result<Model, String> {
        let name = self.name.value().trim();
        if name.is_empty() {
            return Err("Model name is required".to_string());
        }
        Ok(Model::draft(
            name,
            parse_count("Stock men", self.stock_men.value())?,
            parse_count("Stock women", self.stock_women.value())?,
        ))
    }
}

/// New-reservation form. The date is not a field here; it is always the
/// session's selected date. The model is picked from the known model
/// list, never typed, so the denormalized name can be copied over.
#[derive(Default)]
pub struct ReservationForm {
    pub contact: Input,
    pub school: Input,
    pub address: Input,
    pub dance_type: Input,
    pub model_index: Option<usize>,
    pub show_time: Input,
    pub men: Input,
    pub women: Input,
    pub rental_price: Input,
    pub additional_charge: Input,
    pub extras: Input,
    pub delivery_fee: Input,
    pub deposit: Input,
    pub focus: usize,
}

impl ReservationForm {
    pub const FIELDS: usize = 13;
    /// Index of the model selector within the focus order.
    pub const MODEL_FIELD: usize = 4;

    pub fn labels() -> [&'static str; Self::FIELDS] {
        [
            "Contact",
            "School",
            "Address",
            "Dance type",
            "Model",
            "Show time",
            "Men",
            "Women",
            "Rental price",
            "Additional charge",
            "Extras",
            "Delivery fee",
            "Deposit",
        ]
    }

    pub fn input_at(&self, index: usize) -> Option<&Input> {
        match index {
            0 => Some(&self.contact),
            1 => Some(&self.school),
            2 => Some(&self.address),
            3 => Some(&self.dance_type),
            Self::MODEL_FIELD => None,
            5 => Some(&self.show_time),
            6 => Some(&self.men),
            7 => Some(&self.women),
            8 => Some(&self.rental_price),
            9 => Some(&self.additional_charge),
            10 => Some(&self.extras),
            11 => Some(&self.delivery_fee),
            _ => Some(&self.deposit),
        }
    }

    pub fn focused_input_mut(&mut self) -> Option<&mut Input> {
        match self.focus {
            0 => Some(&mut self.contact),
            1 => Some(&mut self.school),
            2 => Some(&mut self.address),
            3 => Some(&mut self.dance_type),
            Self::MODEL_FIELD => None,
            5 => Some(&mut self.show_time),
            6 => Some(&mut self.men),
            7 => Some(&mut self.women),
            8 => Some(&mut self.rental_price),
            9 => Some(&mut self.additional_charge),
            10 => Some(&mut self.extras),
            11 => Some(&mut self.delivery_fee),
            _ => Some(&mut self.deposit),
        }
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % Self::FIELDS;
    }

    pub fn prev_field(&mut self) {
        self.focus = (self.focus + Self::FIELDS - 1) % Self::FIELDS;
    }

    /// Steps the model selector. Wraps around; does nothing with no
    /// models loaded.
    pub fn cycle_model(&mut self, forward: bool, model_count: usize) {
        if model_count == 0 {
            self.model_index = None;
            return;
        }
        self.model_index = Some(match (self.model_index, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % model_count,
            (Some(i), false) => (i + model_count - 1) % model_count,
        });
    }

    pub fn draft(&self, date: &str, models: &[Model]) -> Result<Reservation, String> {
        let contact = self.contact.value().trim();
        if contact.is_empty() {
            return Err("Contact is required".to_string());
        }
        let school = self.school.value().trim();
        if school.is_empty() {
            return Err("School is required".to_string());
        }
        let address = self.address.value().trim();
        if address.is_empty() {
            return Err("Address is required".to_string());
        }
        let dance_type = self.dance_type.value().trim();
        if dance_type.is_empty() {
            return Err("Dance type is required".to_string());
        }
        let model = self
            .model_index
            .and_then(|i| models.get(i))
            .ok_or_else(|| "Select a model".to_string())?;
        let model_id = model
            .id
            .clone()
            .ok_or_else(|| "Selected model has not been persisted yet".to_string())?;

        Ok(Reservation {
            id: None,
            date: date.to_string(),
            contact: contact.to_string(),
            school: school.to_string(),
            address: address.to_string(),
            dance_type: dance_type.to_string(),
            model_id,
            model_name: Some(model.name.clone()),
            rental_price: parse_amount("Rental price", self.rental_price.value())?,
            men: parse_count("Men", self.men.value())?,
            women: parse_count("Women", self.women.value())?,
            additional_charge: parse_amount("Additional charge", self.additional_charge.value())?,
            extras: optional_text(&self.extras),
            show_time: optional_text(&self.show_time),
            delivery_fee: optional_amount("Delivery fee", &self.delivery_fee)?,
            deposit: optional_amount("Deposit", &self.deposit)?,
            total: None,
        })
    }

    /// After a confirmed create, only the per-booking detail resets;
    /// contact, address, dance type and the model selection stay for
    /// rapid repeat entry.
    pub fn clear_booking_fields(&mut self) {
        self.school.reset();
        self.men.reset();
        self.women.reset();
        self.additional_charge.reset();
        self.extras.reset();
    }
}
