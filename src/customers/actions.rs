//! Simulated payment actions
//!
//! None of these touch a payment provider or mutate the record; they only
//! produce the confirmation the dashboard shows.

use super::directory::CustomerDirectory;
use super::error::ActionError;
use super::types::{CustomerRecord, PaymentMode};
use crate::notify::Notification;

/// A billing action offered on a customer row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentAction {
    StopAutoPay,
    StartAutoPay,
    SendPaymentLink,
}

impl PaymentAction {
    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            PaymentAction::StopAutoPay => "Stop Auto-Pay",
            PaymentAction::StartAutoPay => "Start Auto-Pay",
            PaymentAction::SendPaymentLink => "Send Payment Link",
        }
    }

    /// Past-tense verb used in the confirmation
    pub fn verb(&self) -> &'static str {
        match self {
            PaymentAction::StopAutoPay => "stopped",
            PaymentAction::StartAutoPay => "started",
            PaymentAction::SendPaymentLink => "link sent",
        }
    }

    /// Actions offered for a customer, in button order.
    ///
    /// Automated billing can be stopped; every other mode can be started.
    /// A payment link can always be sent.
    pub fn available_for(record: &CustomerRecord) -> [PaymentAction; 2] {
        let toggle = if record.payment_mode == PaymentMode::Automated {
            PaymentAction::StopAutoPay
        } else {
            PaymentAction::StartAutoPay
        };
        [toggle, PaymentAction::SendPaymentLink]
    }

    /// Confirmation for this action on `record`
    pub fn confirmation(&self, record: &CustomerRecord) -> Notification {
        let verb = self.verb();
        Notification::new(
            format!("Payment {}", verb),
            format!("Payment {} for {} has been processed.", verb, record.name),
        )
    }
}

/// Perform `action` for customer `id`, returning the confirmation to show
pub fn perform<D: CustomerDirectory + ?Sized>(
    directory: &D,
    id: u32,
    action: PaymentAction,
) -> Result<Notification, ActionError> {
    let record = directory.find(id).ok_or(ActionError::NotFound(id))?;

    tracing::info!(
        customer_id = id,
        customer = %record.name,
        action = action.verb(),
        "Simulated payment action"
    );

    Ok(action.confirmation(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customers::directory::StaticDirectory;

    #[test]
    fn test_available_actions_follow_payment_mode() {
        let directory = StaticDirectory::seeded();

        let john = directory.find(1).unwrap(); // automated
        assert_eq!(
            PaymentAction::available_for(john),
            [PaymentAction::StopAutoPay, PaymentAction::SendPaymentLink]
        );

        for id in [2, 3, 4] {
            let record = directory.find(id).unwrap(); // manual, failed, stopped
            assert_eq!(PaymentAction::available_for(record)[0], PaymentAction::StartAutoPay);
        }
    }

    #[test]
    fn test_confirmation_names_customer() {
        let directory = StaticDirectory::seeded();

        let n = perform(&directory, 2, PaymentAction::SendPaymentLink).unwrap();
        assert_eq!(n.title, "Payment link sent");
        assert_eq!(n.description, "Payment link sent for Sarah Johnson has been processed.");
        assert!(!n.is_destructive());
    }

    #[test]
    fn test_action_does_not_mutate_directory() {
        let directory = StaticDirectory::seeded();
        let before = directory.all().to_vec();

        perform(&directory, 1, PaymentAction::StopAutoPay).unwrap();
        assert_eq!(directory.all(), before.as_slice());
    }

    #[test]
    fn test_unknown_customer() {
        let directory = StaticDirectory::seeded();
        assert_eq!(
            perform(&directory, 99, PaymentAction::StartAutoPay),
            Err(ActionError::NotFound(99))
        );
    }
}
