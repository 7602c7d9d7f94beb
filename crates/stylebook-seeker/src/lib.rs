//! Predicate engine for filtering record collections.
//!
//! Records expose their fields through the [`Seekable`] trait. A [`Query`]
//! holds compiled [`Clause`]s; an item matches when every clause matches
//! (logical AND). A query with no clauses matches everything, and filtering
//! always preserves the input order.
//!
//! String values for clauses are usually parsed through [`parse_value`],
//! which consults a [`SeekerSchema`] for field types and turns raw user text
//! into typed [`ClauseValue`]s. Pattern compilation is an explicit, fallible
//! step; callers decide what a malformed pattern means. The usual choice is
//! [`Clause::nothing`], which keeps the filter pass total.
//!
//! # Example
//!
//! ```
//! use stylebook_seeker::{ClauseValue, Op, Query, Seekable, Value};
//!
//! struct Face {
//!     family: String,
//!     size: f64,
//! }
//!
//! impl Seekable for Face {
//!     fn seeker_field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "family" => Value::String(&self.family),
//!             "size" => Value::Number(self.size),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let faces = vec![
//!     Face { family: "Inter".into(), size: 14.0 },
//!     Face { family: "Inter".into(), size: 16.0 },
//!     Face { family: "Roboto".into(), size: 14.0 },
//! ];
//!
//! let query = Query::new()
//!     .and("family", Op::Eq, ClauseValue::String("Inter".into()))
//!     .and("size", Op::Eq, ClauseValue::Number(14.0));
//!
//! let hits = query.filter(&faces);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].size, 14.0);
//! ```

mod clause;
pub mod parse;
mod query;
pub mod schema;
mod value;

pub use clause::{Clause, ClauseValue, Op, MEASURE_PRECISION};
pub use parse::{
    compile_pattern, parse_number, parse_value, round_significant, ParseError, ParseResult,
};
pub use query::Query;
pub use schema::{SeekType, SeekerSchema};
pub use value::{Measure, Seekable, Value};
