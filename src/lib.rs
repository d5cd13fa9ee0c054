//! rctr-vol: Ideal Reactor Volume Calculator
//!
//! Required volume of a continuously stirred tank reactor (CSTR) and a plug
//! flow reactor (PFR) for a single first-order irreversible reaction, from a
//! rate constant `k`, a feed molar flow rate `F_A0` and a target conversion `X`.
//!
//! # Architecture
//!
//! rctr-vol is built on two core principles:
//!
//! 1. **Pure core, thin shell**
//!    - Kinetics model and profile generator are pure functions
//!    - The presentation layer passes the live form state in explicitly
//!    - One render cycle is one call to [`presentation::render`]
//!
//! 2. **No masking of the asymptote**
//!    - `X = 1` gives an infinite volume; it is returned, printed and
//!      exported as such, and clipped only when drawing
//!
//! # Quick Start
//!
//! ```rust
//! use rctr_vol::kinetics::ReactionParameters;
//! use rctr_vol::presentation::render;
//!
//! // 1. Operating point
//! let params = ReactionParameters::new(
//!     1.0,    // k [1/s]
//!     1.0,    // F_A0 [mol/s]
//!     0.9,    // X
//! );
//!
//! // 2. Render cycle
//! let (volumes, profile) = render(params);
//!
//! // 3. Results
//! println!("CSTR Volume: {}", volumes.cstr);
//! println!("PFR Volume: {}", volumes.pfr);
//! assert_eq!(profile.len(), 100);
//! ```
//!
//! # Modules
//!
//! - [`kinetics`]: Design equations (CSTR, PFR)
//! - [`profile`]: Conversion profile sampling
//! - [`presentation`]: Input controls, render cycle, interactive shell
//! - [`output`]: Chart rendering and CSV export

// Core modules
pub mod kinetics;
pub mod profile;

pub mod presentation;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use rctr_vol::prelude::*;
    //! ```
    pub use crate::kinetics::{cstr_volume,
                              pfr_volume,
                              IdealReactor,
                              Cstr,
                              Pfr,
                              ReactionParameters,
                              VolumeResult};
    pub use crate::profile::{pfr_conversion_profile,
                             conversion_profile,
                             ConversionProfile,
                             PROFILE_POINTS};
    pub use crate::presentation::{render,
                                  Field,
                                  FormState,
                                  RenderedView};
}
