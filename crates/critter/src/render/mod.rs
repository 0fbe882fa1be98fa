//! Module: render
//! Responsibility: turn predicates and criteria queries into parameterized
//! SQL text.
//! Does not own: connections or statement execution.
//! Boundary: every literal is bound as a parameter; nothing user-supplied
//! is spliced into the SQL text.

mod config;

#[cfg(test)]
mod tests;

use crate::{
    criteria::{CriteriaQuery, Expression, Predicate},
    entity::Entity,
    error::RenderError,
    value::Value,
};
use tracing::debug;

// re-exports
pub use config::{Placeholder, RenderConfig};

///
/// RenderedSql
///
/// SQL text plus the parameters it binds, in placeholder order.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderedSql {
    pub sql: String,
    pub params: Vec<Value>,
}

/// Render `pred` as the body of a `WHERE` clause.
pub fn render_where(pred: &Predicate, config: &RenderConfig) -> Result<RenderedSql, RenderError> {
    let mut renderer = Renderer::new(config);
    renderer.predicate(pred)?;

    Ok(renderer.finish())
}

/// Render a full `SELECT` over `table` for `query`.
pub fn render_query<E: Entity>(
    query: &CriteriaQuery<E>,
    table: &str,
    config: &RenderConfig,
) -> Result<RenderedSql, RenderError> {
    let mut renderer = Renderer::new(config);

    renderer.sql.push_str("SELECT ");
    if query.is_distinct() {
        renderer.sql.push_str("DISTINCT ");
    }
    renderer.sql.push_str("* FROM ");
    renderer.identifier(table);

    if let Some(pred) = query.restriction() {
        renderer.sql.push_str(" WHERE ");
        renderer.predicate(pred)?;
    }

    let rendered = renderer.finish();
    debug!(
        entity = E::ENTITY_NAME,
        sql = %rendered.sql,
        params = rendered.params.len(),
        "rendered criteria query"
    );

    Ok(rendered)
}

///
/// Renderer
///

struct Renderer<'a> {
    config: &'a RenderConfig,
    sql: String,
    params: Vec<Value>,
}

impl<'a> Renderer<'a> {
    const fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn finish(self) -> RenderedSql {
        RenderedSql {
            sql: self.sql,
            params: self.params,
        }
    }

    fn predicate(&mut self, pred: &Predicate) -> Result<(), RenderError> {
        match pred {
            Predicate::True => self.sql.push_str("1 = 1"),
            Predicate::False => self.sql.push_str("1 = 0"),
            Predicate::And(preds) if preds.is_empty() => self.sql.push_str("1 = 1"),
            Predicate::Or(preds) if preds.is_empty() => self.sql.push_str("1 = 0"),
            Predicate::And(preds) => self.junction(preds, " AND ")?,
            Predicate::Or(preds) => self.junction(preds, " OR ")?,
            Predicate::Not(inner) => {
                self.sql.push_str("NOT (");
                self.predicate(inner)?;
                self.sql.push(')');
            }
            Predicate::Equal { left, right } => {
                self.expression(left)?;
                self.sql.push_str(" = ");
                self.expression(right)?;
            }
            // empty sets never reach the engine as `IN ()`
            Predicate::In { values, .. } if values.is_empty() => self.sql.push_str("1 = 0"),
            Predicate::In { expr, values } => {
                self.expression(expr)?;
                self.sql.push_str(" IN (");
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        self.sql.push_str(", ");
                    }
                    self.bind(value)?;
                }
                self.sql.push(')');
            }
            Predicate::Like {
                expr,
                pattern,
                escape,
            } => {
                self.expression(expr)?;
                self.sql.push_str(" LIKE ");
                self.bind(&Value::Text(pattern.clone()))?;
                if let Some(c) = escape {
                    self.sql.push_str(" ESCAPE ");
                    self.sql.push_str(&Value::Text(c.to_string()).to_string());
                }
            }
            Predicate::IsNull(expr) => {
                self.expression(expr)?;
                self.sql.push_str(" IS NULL");
            }
        }

        Ok(())
    }

    fn junction(&mut self, preds: &[Predicate], sep: &str) -> Result<(), RenderError> {
        self.sql.push('(');
        for (i, pred) in preds.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(sep);
            }
            self.predicate(pred)?;
        }
        self.sql.push(')');

        Ok(())
    }

    fn expression(&mut self, expr: &Expression) -> Result<(), RenderError> {
        match expr {
            Expression::Path { field, .. } => self.identifier(field),
            Expression::Literal(value) => self.bind(value)?,
            Expression::Upper(inner) => {
                self.sql.push_str("UPPER(");
                self.expression(inner)?;
                self.sql.push(')');
            }
        }

        Ok(())
    }

    fn identifier(&mut self, name: &str) {
        if self.config.quote_identifiers {
            self.sql.push('"');
            self.sql.push_str(&name.replace('"', "\"\""));
            self.sql.push('"');
        } else {
            self.sql.push_str(name);
        }
    }

    fn bind(&mut self, value: &Value) -> Result<(), RenderError> {
        if let Value::List(_) = value {
            return Err(RenderError::UnsupportedValue { kind: value.kind() });
        }

        self.params.push(value.clone());
        match self.config.placeholder {
            Placeholder::Question => self.sql.push('?'),
            Placeholder::Numbered => {
                self.sql.push('$');
                self.sql.push_str(&self.params.len().to_string());
            }
        }

        Ok(())
    }
}
