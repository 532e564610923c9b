/// Answers for one questionnaire entry, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    fields: Vec<(String, String)>,
}

impl FieldRecord {
    /// Empty answers for `headers`.
    pub fn new(headers: &[String]) -> Self {
        Self {
            fields: headers
                .iter()
                .map(|header| (header.clone(), String::new()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn header(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|(header, _)| header.as_str())
    }

    pub fn answer(&self, header: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == header)
            .map(|(_, answer)| answer.as_str())
    }

    /// Replaces the answer at `index`; returns false when out of range.
    pub fn set(&mut self, index: usize, value: String) -> bool {
        match self.fields.get_mut(index) {
            Some((_, answer)) => {
                *answer = value;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(header, answer)| (header.as_str(), answer.as_str()))
    }

    pub fn headers(&self) -> Vec<String> {
        self.fields.iter().map(|(header, _)| header.clone()).collect()
    }

    pub fn answers(&self) -> Vec<String> {
        self.fields.iter().map(|(_, answer)| answer.clone()).collect()
    }
}
