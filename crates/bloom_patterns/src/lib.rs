//! # bloom_patterns
//!
//! Design pattern labs for the Bloomify flower shop.
//!
//! Each lab is a short demonstration that writes its narration to any
//! [`std::io::Write`] sink:
//!
//! - **SOLID**: single responsibility, open/closed, dependency inversion
//! - **Creational**: configuration value, builder, factory
//! - **Structural**: adapter, decorator, facade
//! - **Behavioral**: observer, strategy, command
//!
//! Every family of interchangeable behaviors is a closed enum dispatched
//! with `match`.
//!
//! ## Example
//!
//! ```rust
//! use bloom_core::LabConfig;
//! use bloom_patterns::Lab;
//!
//! let lab = Lab::from_choice("1").unwrap();
//! let mut out = Vec::new();
//! lab.run(&LabConfig::default(), &mut out).unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("SRP"));
//! ```

pub mod behavioral;
pub mod creational;
pub mod error;
pub mod labs;
pub mod solid;
pub mod structural;

pub use behavioral::{DeliveryContext, DeliveryStrategy, Observer, Order};
pub use creational::{BouquetBuilder, PaymentMethod};
pub use error::{PatternError, PatternResult};
pub use labs::Lab;
pub use solid::{MessageSender, Notification, Report, Shape};
pub use structural::{
    DecoratedBouquet, Extra, LegacyPaymentAdapter, LegacyPaymentGateway, OrderService,
    PaymentProvider,
};
