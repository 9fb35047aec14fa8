use parcel_core::{capitalize_first, ParcelRequest};

const MAX_FIELD_LEN: usize = 48;

/// Single-line text input with a byte cursor. ASCII only.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    input: String,
    cursor: usize,
}

impl TextField {
    pub fn value(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.input.len() as isize;
        self.cursor = (self.cursor as isize + delta).clamp(0, len) as usize;
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.input.len();
    }

    pub fn insert(&mut self, ch: char) {
        if self.input.len() >= MAX_FIELD_LEN {
            return;
        }
        if ch.is_ascii() && !ch.is_ascii_control() {
            self.input.insert(self.cursor, ch);
            self.cursor += 1;
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 && self.cursor <= self.input.len() {
            self.cursor -= 1;
            self.input.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.input.len() {
            self.input.remove(self.cursor);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Sender,
    Receiver,
    Weight,
    Source,
    Destination,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Sender,
        Field::Receiver,
        Field::Weight,
        Field::Source,
        Field::Destination,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Sender => "Sender",
            Field::Receiver => "Receiver",
            Field::Weight => "Weight (in KG)",
            Field::Source => "Source Location",
            Field::Destination => "Destination Location",
        }
    }
}

/// The "Add Parcel" form.
#[derive(Debug, Clone, Default)]
pub struct ParcelForm {
    fields: [TextField; 5],
    focus: usize,
}

impl ParcelForm {
    pub fn focus(&self) -> Field {
        Field::ALL[self.focus]
    }

    pub fn is_last(&self) -> bool {
        self.focus + 1 == Field::ALL.len()
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Field::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Field::ALL.len() - 1) % Field::ALL.len();
    }

    pub fn field(&self, field: Field) -> &TextField {
        &self.fields[field as usize]
    }

    pub fn field_mut(&mut self, field: Field) -> &mut TextField {
        &mut self.fields[field as usize]
    }

    pub fn focused_mut(&mut self) -> &mut TextField {
        &mut self.fields[self.focus]
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.focus = 0;
    }

    /// Turn raw input into a registration request. Names and locations are
    /// case-normalised; the weight must be a positive number.
    pub fn parse(&self) -> Result<ParcelRequest, String> {
        let sender = capitalize_first(self.field(Field::Sender).value().trim());
        if sender.is_empty() {
            return Err("Sender is required.".to_string());
        }
        let receiver = capitalize_first(self.field(Field::Receiver).value().trim());
        if receiver.is_empty() {
            return Err("Receiver is required.".to_string());
        }
        let weight = parse_weight(self.field(Field::Weight).value())?;
        let source = capitalize_first(self.field(Field::Source).value().trim());
        let destination = capitalize_first(self.field(Field::Destination).value().trim());
        Ok(ParcelRequest {
            sender,
            receiver,
            weight,
            source,
            destination,
        })
    }
}

pub fn parse_weight(raw: &str) -> Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(weight) if weight.is_finite() && weight > 0.0 => Ok(weight),
        _ => Err("Invalid weight input.".to_string()),
    }
}

pub fn parse_parcel_id(raw: &str) -> Result<u32, String> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| "Invalid Parcel ID.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(values: [&str; 5]) -> ParcelForm {
        let mut form = ParcelForm::default();
        for (field, value) in Field::ALL.into_iter().zip(values) {
            for ch in value.chars() {
                form.field_mut(field).insert(ch);
            }
        }
        form
    }

    #[test]
    fn parses_and_normalises_input() {
        let form = filled(["  aLiCe ", "BOB", "12", "vijayawada", "BANGALORE"]);
        let request = form.parse().unwrap();
        assert_eq!(request.sender, "Alice");
        assert_eq!(request.receiver, "Bob");
        assert_eq!(request.weight, 12.0);
        assert_eq!(request.source, "Vijayawada");
        assert_eq!(request.destination, "Bangalore");
    }

    #[test]
    fn rejects_bad_weight() {
        let form = filled(["a", "b", "heavy", "Delhi", "Chennai"]);
        assert_eq!(form.parse().unwrap_err(), "Invalid weight input.");
        assert!(parse_weight("0").is_err());
        assert!(parse_weight("-3").is_err());
        assert!(parse_weight("NaN").is_err());
        assert_eq!(parse_weight(" 4.5 "), Ok(4.5));
    }

    #[test]
    fn rejects_missing_names() {
        let form = filled(["", "b", "1", "Delhi", "Chennai"]);
        assert_eq!(form.parse().unwrap_err(), "Sender is required.");
    }

    #[test]
    fn parses_ids() {
        assert_eq!(parse_parcel_id(" 101 "), Ok(101));
        assert!(parse_parcel_id("abc").is_err());
        assert!(parse_parcel_id("-1").is_err());
    }

    #[test]
    fn text_field_editing() {
        let mut field = TextField::default();
        for ch in "Delhi".chars() {
            field.insert(ch);
        }
        field.move_cursor(-2);
        field.backspace();
        assert_eq!(field.value(), "Dehi");
        field.move_home();
        field.delete();
        assert_eq!(field.value(), "ehi");
        field.move_end();
        assert_eq!(field.cursor(), 3);
        field.insert('é');
        assert_eq!(field.value(), "ehi");
    }

    #[test]
    fn focus_wraps() {
        let mut form = ParcelForm::default();
        form.focus_prev();
        assert_eq!(form.focus(), Field::Destination);
        assert!(form.is_last());
        form.focus_next();
        assert_eq!(form.focus(), Field::Sender);
    }
}
