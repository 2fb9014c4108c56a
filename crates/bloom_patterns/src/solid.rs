//! SOLID principle demonstrations.
//!
//! - SRP: [`Report`] only knows how to present itself
//! - OCP: [`Shape`] gains new variants without touching [`print_area`]
//! - DIP: [`Notification`] depends on a [`MessageSender`], not on a channel

use std::io::Write;

use crate::error::PatternResult;

/// Approximation of pi used for circle areas.
pub const PI_APPROX: f64 = 3.14;

/// A titled block of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub text: String,
}

impl Report {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn display(&self, out: &mut dyn Write) -> PatternResult<()> {
        writeln!(out, "=== {} ===", self.title)?;
        writeln!(out, "{}", self.text)?;
        Ok(())
    }
}

/// A plane shape with a computable area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f64 },
    Square { side: f64 },
}

impl Shape {
    pub fn area(&self) -> f64 {
        match self {
            Self::Circle { radius } => PI_APPROX * radius * radius,
            Self::Square { side } => side * side,
        }
    }
}

/// Print the area of any shape with two decimals.
pub fn print_area(shape: &Shape, out: &mut dyn Write) -> PatternResult<()> {
    writeln!(out, "Area: {:.2}", shape.area())?;
    Ok(())
}

/// Channel used to deliver a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSender {
    Email,
    Sms,
}

impl MessageSender {
    pub fn send(&self, msg: &str, out: &mut dyn Write) -> PatternResult<()> {
        match self {
            Self::Email => writeln!(out, "📧 Sending email: {}", msg)?,
            Self::Sms => writeln!(out, "📱 Sending SMS: {}", msg)?,
        }
        Ok(())
    }
}

/// Raises alerts through whichever sender it was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub sender: MessageSender,
}

impl Notification {
    pub const ALERT_MESSAGE: &'static str = "System alert triggered!";

    pub fn new(sender: MessageSender) -> Self {
        Self { sender }
    }

    pub fn alert(&self, out: &mut dyn Write) -> PatternResult<()> {
        self.sender.send(Self::ALERT_MESSAGE, out)
    }
}

/// Run the SOLID walkthrough.
pub fn run(out: &mut dyn Write) -> PatternResult<()> {
    writeln!(out, "—— SRP (Single Responsibility Principle) ——")?;
    let report = Report::new("Lab 1 - SOLID", "Understanding SRP, OCP, and DIP");
    report.display(out)?;
    writeln!(out)?;

    writeln!(out, "—— OCP (Open/Closed Principle) ——")?;
    for shape in [Shape::Circle { radius: 3.0 }, Shape::Square { side: 4.0 }] {
        print_area(&shape, out)?;
    }
    writeln!(out)?;

    writeln!(out, "—— DIP (Dependency Inversion Principle) ——")?;
    for sender in [MessageSender::Email, MessageSender::Sms] {
        Notification::new(sender).alert(out)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "✅ Lab 1 finished:  SRP (Report), OCP (Shape), DIP (Notification/MessageSender)."
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut dyn Write) -> PatternResult<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_display() {
        let report = Report::new("Title", "Body");
        assert_eq!(render(|out| report.display(out)), "=== Title ===\nBody\n");
    }

    #[test]
    fn test_shape_area() {
        assert!((Shape::Circle { radius: 3.0 }.area() - 28.26).abs() < 1e-9);
        assert_eq!(Shape::Square { side: 4.0 }.area(), 16.0);
    }

    #[test]
    fn test_print_area_formats_two_decimals() {
        let text = render(|out| print_area(&Shape::Circle { radius: 3.0 }, out));
        assert_eq!(text, "Area: 28.26\n");

        let text = render(|out| print_area(&Shape::Square { side: 4.0 }, out));
        assert_eq!(text, "Area: 16.00\n");
    }

    #[test]
    fn test_notification_uses_its_sender() {
        let email = render(|out| Notification::new(MessageSender::Email).alert(out));
        assert_eq!(email, "📧 Sending email: System alert triggered!\n");

        let sms = render(|out| Notification::new(MessageSender::Sms).alert(out));
        assert_eq!(sms, "📱 Sending SMS: System alert triggered!\n");
    }

    #[test]
    fn test_run_covers_all_principles() {
        let text = render(run);
        assert!(text.contains("=== Lab 1 - SOLID ==="));
        assert!(text.contains("Area: 28.26"));
        assert!(text.contains("Area: 16.00"));
        assert!(text.contains("📧 Sending email"));
        assert!(text.contains("📱 Sending SMS"));
        assert!(text.trim_end().ends_with("DIP (Notification/MessageSender)."));
    }
}
