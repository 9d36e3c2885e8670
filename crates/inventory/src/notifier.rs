//! Messaging abstraction used by a store to notify a recipient.

use std::sync::Arc;

use puffstore_core::ServiceError;

/// Dispatches a message to an external channel.
///
/// `Ok(_)` means the message was accepted. The boolean carries no meaning
/// beyond that; callers must not treat `Ok(false)` as a failure.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn send(&self, recipient_id: &str) -> Result<bool, ServiceError>;
}

impl<N> Notifier for Arc<N>
where
    N: Notifier + ?Sized,
{
    fn send(&self, recipient_id: &str) -> Result<bool, ServiceError> {
        (**self).send(recipient_id)
    }
}

/// Production notifier for the LINE messaging channel.
///
/// The channel itself is external; this accepts every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineNotifier;

impl LineNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for LineNotifier {
    fn send(&self, recipient_id: &str) -> Result<bool, ServiceError> {
        tracing::debug!(recipient_id, "dispatching line message");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn line_notifier_accepts_messages() {
        assert_eq!(LineNotifier::new().send("igroomgrim"), Ok(true));
    }

    #[test]
    fn arc_passes_recipient_through() {
        let mut mock = MockNotifier::new();
        mock.expect_send()
            .with(eq("1112"))
            .times(1)
            .returning(|_| Ok(true));

        assert_eq!(Arc::new(mock).send("1112"), Ok(true));
    }
}
