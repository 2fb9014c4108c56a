//! Behavioral pattern demonstrations: observer, strategy and command.

use std::io::Write;

use tracing::debug;

use bloom_core::{Action, Bouquet, CommandManager};

use crate::error::PatternResult;

/// A party interested in order status changes.
///
/// Each notifier keeps the statuses it was told about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observer {
    Email { outbox: Vec<String> },
    Sms { outbox: Vec<String> },
}

impl Observer {
    pub fn email() -> Self {
        Self::Email { outbox: Vec::new() }
    }

    pub fn sms() -> Self {
        Self::Sms { outbox: Vec::new() }
    }

    pub fn update(&mut self, status: &str) {
        match self {
            Self::Email { outbox } => {
                debug!("Email notifier received status {:?}", status);
                outbox.push(status.to_string());
            }
            Self::Sms { outbox } => {
                debug!("SMS notifier received status {:?}", status);
                outbox.push(status.to_string());
            }
        }
    }

    /// Statuses received so far, oldest first.
    pub fn received(&self) -> &[String] {
        match self {
            Self::Email { outbox } | Self::Sms { outbox } => outbox,
        }
    }
}

/// An order that tells its observers whenever its status changes.
#[derive(Debug, Clone, Default)]
pub struct Order {
    status: String,
    observers: Vec<Observer>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.notify();
    }

    pub fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.update(&self.status);
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn observers(&self) -> &[Observer] {
        &self.observers
    }
}

/// How an order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStrategy {
    Courier,
    Drone,
}

impl DeliveryStrategy {
    pub fn deliver(&self, order_id: u32, out: &mut dyn Write) -> PatternResult<()> {
        match self {
            Self::Courier => writeln!(out, "Courier delivers {}", order_id)?,
            Self::Drone => writeln!(out, "Drone delivers {}", order_id)?,
        }
        Ok(())
    }
}

/// Delivers orders with a swappable strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryContext {
    strategy: DeliveryStrategy,
}

impl DeliveryContext {
    pub fn new(strategy: DeliveryStrategy) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: DeliveryStrategy) {
        self.strategy = strategy;
    }

    pub fn strategy(&self) -> DeliveryStrategy {
        self.strategy
    }

    pub fn execute(&self, order_id: u32, out: &mut dyn Write) -> PatternResult<()> {
        self.strategy.deliver(order_id, out)
    }
}

/// Run the behavioral walkthrough.
pub fn run(out: &mut dyn Write) -> PatternResult<()> {
    writeln!(out, "—— Observer ——")?;
    let mut order = Order::new();
    order.attach(Observer::email());
    order.set_status("Packed");
    writeln!(
        out,
        "Order status: {} (notified {} observer(s))",
        order.status(),
        order.observers().len()
    )?;
    writeln!(out)?;

    writeln!(out, "—— Strategy ——")?;
    let mut delivery = DeliveryContext::new(DeliveryStrategy::Courier);
    delivery.set_strategy(DeliveryStrategy::Drone);
    delivery.execute(1, out)?;
    writeln!(out)?;

    writeln!(out, "—— Command ——")?;
    let mut bouquet = Bouquet::new("Roses");
    let mut manager = CommandManager::new();
    manager.run(&mut bouquet, Action::add_flower("Rose"));
    writeln!(out, "After add: {:?}", bouquet.flowers)?;
    manager.undo(&mut bouquet);
    writeln!(out, "After undo: {:?}", bouquet.flowers)?;
    Ok(())
}
