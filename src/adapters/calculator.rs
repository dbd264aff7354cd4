//! Arithmetic evaluator for the `calculate` tool
//!
//! Input is restricted to numbers, whitespace and `+ - * / % ( )` before it
//! reaches the script engine. Every literal is evaluated as a float so that
//! `7/2` is `3.5`.

use rhai::{Engine, FLOAT};

pub struct Calculator {
    engine: Engine,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        let mut engine = Engine::new();
        engine.set_max_operations(1_000);
        engine.set_max_expr_depths(64, 8);
        engine.set_max_string_size(256);
        Self { engine }
    }

    /// Evaluate `operation`, returning the result or an error message
    pub fn calculate(&self, operation: &str) -> String {
        match self.evaluate(operation) {
            Ok(value) => format_number(value),
            Err(e) => format!("Error in calculation: {}", e),
        }
    }

    pub fn evaluate(&self, operation: &str) -> Result<FLOAT, String> {
        if let Some(c) = operation
            .chars()
            .find(|c| !(c.is_ascii_digit() || c.is_whitespace() || "+-*/%().".contains(*c)))
        {
            return Err(format!("unsupported character '{}'", c));
        }
        if operation.trim().is_empty() {
            return Err("empty expression".to_string());
        }

        let value = self
            .engine
            .eval_expression::<FLOAT>(&float_literals(operation))
            .map_err(|e| e.to_string())?;

        if value.is_finite() {
            Ok(value)
        } else {
            Err("division by zero".to_string())
        }
    }
}

/// Rewrite integer literals as float literals (`7` -> `7.0`, `.5` -> `0.5`)
fn float_literals(expression: &str) -> String {
    let mut out = String::with_capacity(expression.len() + 8);
    let mut number = String::new();

    let flush = |number: &mut String, out: &mut String| {
        if number.is_empty() {
            return;
        }
        if number.starts_with('.') {
            out.push('0');
        }
        out.push_str(number);
        if !number.contains('.') {
            out.push_str(".0");
        } else if number.ends_with('.') {
            out.push('0');
        }
        number.clear();
    };

    for c in expression.chars() {
        if c.is_ascii_digit() || c == '.' {
            number.push(c);
        } else {
            flush(&mut number, &mut out);
            out.push(c);
        }
    }
    flush(&mut number, &mut out);
    out
}

fn format_number(value: FLOAT) -> String {
    if value == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    value.to_string()
}
