use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("no window/document")]
    NoDocument,

    #[error("dom: {0}")]
    Dom(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let e = UiError::Dom("addEventListener(click) failed".to_string());
        assert_eq!(e.to_string(), "dom: addEventListener(click) failed");
        assert_eq!(UiError::NoDocument.to_string(), "no window/document");

        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e = UiError::from(parse);
        assert!(e.to_string().starts_with("config: "));
    }
}
