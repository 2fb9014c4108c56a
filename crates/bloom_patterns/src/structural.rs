//! Structural pattern demonstrations: adapter, decorator and facade.

use std::io::Write;

use tracing::debug;

use bloom_core::BasicBouquet;

use crate::creational::PaymentMethod;
use crate::error::PatternResult;

/// A payment gateway that only understands integer cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyPaymentGateway {
    pub merchant_id: String,
}

impl LegacyPaymentGateway {
    pub fn new(merchant_id: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
        }
    }

    pub fn make_payment(&self, cents: i64, out: &mut dyn Write) -> PatternResult<()> {
        writeln!(
            out,
            "[LegacyPayment] Charging {} cents via merchant {}",
            cents, self.merchant_id
        )?;
        Ok(())
    }
}

/// Presents a [`LegacyPaymentGateway`] as an amount-based provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyPaymentAdapter {
    pub gateway: LegacyPaymentGateway,
}

impl LegacyPaymentAdapter {
    pub fn new(gateway: LegacyPaymentGateway) -> Self {
        Self { gateway }
    }

    /// Convert an amount to whole cents, rounding half away from zero.
    pub fn to_cents(amount: f64) -> i64 {
        (amount * 100.0).round() as i64
    }

    pub fn pay(&self, amount: f64, out: &mut dyn Write) -> PatternResult<()> {
        let cents = Self::to_cents(amount);
        debug!("Adapting {} to {} cents", amount, cents);
        self.gateway.make_payment(cents, out)
    }
}

/// Anything the order service can charge through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentProvider {
    Legacy(LegacyPaymentAdapter),
    Method(PaymentMethod),
}

impl PaymentProvider {
    pub fn pay(&self, amount: f64, out: &mut dyn Write) -> PatternResult<()> {
        match self {
            Self::Legacy(adapter) => adapter.pay(amount, out),
            Self::Method(method) => method.pay(amount, out),
        }
    }
}

/// An add-on applied on top of a bouquet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extra {
    Ribbon,
    Card,
    Vase,
}

impl Extra {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ribbon => "with ribbon",
            Self::Card => "with card",
            Self::Vase => "with vase",
        }
    }

    pub fn surcharge(&self) -> f64 {
        match self {
            Self::Ribbon => 3.5,
            Self::Card => 5.0,
            Self::Vase => 25.0,
        }
    }
}

/// A base bouquet plus extras, applied in the order they were added.
#[derive(Debug, Clone, PartialEq)]
pub struct DecoratedBouquet {
    pub base: BasicBouquet,
    pub extras: Vec<Extra>,
}

impl DecoratedBouquet {
    pub fn new(base: BasicBouquet) -> Self {
        Self {
            base,
            extras: Vec::new(),
        }
    }

    pub fn with(mut self, extra: Extra) -> Self {
        self.extras.push(extra);
        self
    }

    pub fn description(&self) -> String {
        self.extras
            .iter()
            .fold(self.base.description(), |desc, extra| {
                format!("{}, {}", desc, extra.label())
            })
    }

    pub fn price(&self) -> f64 {
        self.extras
            .iter()
            .fold(self.base.price(), |price, extra| price + extra.surcharge())
    }
}

/// Single entry point for placing an order.
#[derive(Debug, Clone)]
pub struct OrderService {
    provider: PaymentProvider,
}

impl OrderService {
    pub fn new(provider: PaymentProvider) -> Self {
        Self { provider }
    }

    pub fn place_order(
        &self,
        bouquet: &DecoratedBouquet,
        customer: &str,
        out: &mut dyn Write,
    ) -> PatternResult<()> {
        let price = bouquet.price();
        writeln!(out, "=== ORDER ===")?;
        writeln!(out, "Customer: {}", customer)?;
        writeln!(out, "Bouquet: {}", bouquet.description())?;
        writeln!(out, "Price: {}", price)?;
        self.provider.pay(price, out)?;
        writeln!(out, "Order completed.")?;
        Ok(())
    }
}

/// Run the structural walkthrough.
pub fn run(out: &mut dyn Write) -> PatternResult<()> {
    let bouquet = DecoratedBouquet::new(BasicBouquet::new("Romantic Roses", 350.0))
        .with(Extra::Ribbon)
        .with(Extra::Card)
        .with(Extra::Vase);

    let gateway = LegacyPaymentGateway::new("BLOOMIFY-123");
    let provider = PaymentProvider::Legacy(LegacyPaymentAdapter::new(gateway));

    OrderService::new(provider).place_order(&bouquet, "Popescu Sabina", out)?;
    writeln!(out, "Done.")?;
    Ok(())
}
