use crate::error::Error;

/// Snapshot of form fields captured at submit time. Field order is preserved
/// into the multipart body, the way a browser serializes a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    fields: Vec<(String, String)>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Builds a submission from CLI-style `name=value` strings.
    pub fn from_pairs<S: AsRef<str>>(pairs: &[S]) -> Result<Self, Error> {
        let mut form = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let Some((name, value)) = pair.split_once('=') else {
                return Err(Error::InvalidField(pair.to_string()));
            };
            form.fields.push((name.to_string(), value.to_string()));
        }
        Ok(form)
    }

    pub fn fields(&self) -> impl Iterator<Item = &(String, String)> {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_preserves_order() {
        let form = FormSubmission::from_pairs(&["urls=http://a", "format=mp4", "quality=720p"])
            .unwrap();
        let fields: Vec<_> = form.fields().cloned().collect();
        assert_eq!(
            fields,
            vec![
                ("urls".to_string(), "http://a".to_string()),
                ("format".to_string(), "mp4".to_string()),
                ("quality".to_string(), "720p".to_string()),
            ]
        );
    }

    #[test]
    fn from_pairs_keeps_equals_in_value() {
        let form = FormSubmission::from_pairs(&["q=a=b"]).unwrap();
        let fields: Vec<_> = form.fields().cloned().collect();
        assert_eq!(fields, vec![("q".to_string(), "a=b".to_string())]);
    }

    #[test]
    fn from_pairs_rejects_bare_words() {
        let err = FormSubmission::from_pairs(&["no-separator"]).unwrap_err();
        assert!(matches!(err, Error::InvalidField(f) if f == "no-separator"));
    }
}
