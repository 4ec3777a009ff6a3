//! # armkit-id
//!
//! Parsing, construction, and navigation of hierarchical resource identifiers.
//!
//! ## Design Principles
//!
//! - Identifiers are immutable values; every derived field is computed once at construction
//! - Literal keywords are matched case-insensitively; values keep their original case
//! - Identifiers support roundtrip serialization (parse → format → parse)
//! - Parsing and construction are pure: no I/O and no logging
//!
//! ## Identifier Format
//!
//! ```text
//! /subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/{providerNamespace}
//!     [/{ancestorType}/{ancestorName}]*
//!     /{resourceType}/{name}
//! ```
//!
//! Examples:
//! - `subscriptions/S1/resourceGroups/RG1/providers/Prov.X/typeA/name1`
//! - `subscriptions/S1/resourceGroups/RG1/providers/Prov.X/ancT1/ancN1/typeA/name1`
//!
//! The fully-qualified type of the second example is `Prov.X/ancT1/typeA`, and its
//! parent is the top-level `ancT1` resource named `ancN1`.

mod builder;
pub mod constants;
mod error;
mod resource;

pub use builder::ResourceIdentifierBuilder;
pub use error::ResourceIdError;
pub use resource::ResourceIdentifier;
