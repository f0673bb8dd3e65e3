//! Typed views over untyped JSON documents.
//!
//! [`ObjectView`] and [`ArrayView`] wrap a `serde_json` object or array and
//! expose one accessor per logical type (`string`, `number`, `integer`,
//! `boolean`, `object`, `array`, `date_time`, ...). A read either yields the
//! narrowed value or a single [`JsonError`] saying what was expected and where.
//!
//! ```
//! use json_view::{ArrayView, ObjectView};
//!
//! let mut phones = ArrayView::new();
//! phones.append_string("212 555-1234");
//!
//! let mut o = ObjectView::new();
//! o.put_string("name", "John Smith");
//! o.put_integer("age", 25);
//! o.put_array("phoneNumbers", &phones);
//!
//! let back = ObjectView::parse(&o.to_bytes()).unwrap();
//! assert_eq!(back.integer("age").unwrap(), 25);
//! assert!(back.boolean("name").is_err());
//! ```
pub mod array;
pub mod datetime;
pub mod error;
pub mod object;
pub mod path_de;
pub mod tag;

mod narrow;

pub use array::ArrayView;
pub use datetime::{format_iso8601, parse_iso8601, DateTime};
pub use error::{Expected, JsonError, Location, Result};
pub use object::ObjectView;
pub use path_de::from_slice_with_path;
pub use tag::Tag;
