#[derive(Debug, Clone, PartialEq)]
pub enum Value {
  Text(String),
  Number(i64),
}

impl std::fmt::Display for Value {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Value::Text(text) => write!(f, "{}", text),
      Value::Number(number) => write!(f, "{}", number),
    }
  }
}

/// A single input value together with the rules it has to satisfy.
/// Length rules apply to text only, range rules to numbers only.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
  pub value: Value,
  pub required: bool,
  pub min_length: Option<usize>,
  pub max_length: Option<usize>,
  pub min: Option<i64>,
  pub max: Option<i64>,
}

impl Validatable {
  pub fn text(value: &str) -> Self {
    Self::new(Value::Text(value.to_owned()))
  }

  pub fn number(value: i64) -> Self {
    Self::new(Value::Number(value))
  }

  fn new(value: Value) -> Self {
    Self {
      value,
      required: false,
      min_length: None,
      max_length: None,
      min: None,
      max: None,
    }
  }

  pub fn required(mut self) -> Self {
    self.required = true;
    self
  }

  pub fn min_length(mut self, min_length: usize) -> Self {
    self.min_length = Some(min_length);
    self
  }

  pub fn max_length(mut self, max_length: usize) -> Self {
    self.max_length = Some(max_length);
    self
  }

  pub fn min(mut self, min: i64) -> Self {
    self.min = Some(min);
    self
  }

  pub fn max(mut self, max: i64) -> Self {
    self.max = Some(max);
    self
  }
}

pub fn validate(input: &Validatable) -> bool {
  let mut is_valid = true;

  if input.required {
    is_valid = is_valid && !input.value.to_string().trim().is_empty();
  }

  match &input.value {
    Value::Text(text) => {
      let length = text.chars().count();
      if let Some(min_length) = input.min_length {
        is_valid = is_valid && length >= min_length;
      }
      if let Some(max_length) = input.max_length {
        is_valid = is_valid && length <= max_length;
      }
    }
    Value::Number(number) => {
      if let Some(min) = input.min {
        is_valid = is_valid && *number >= min;
      }
      if let Some(max) = input.max {
        is_valid = is_valid && *number <= max;
      }
    }
  }

  return is_valid;
}
