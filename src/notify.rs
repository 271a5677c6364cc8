//! User notification seam
//!
//! The form raises alerts through [`Notifier`] so it can run without a
//! window attached. The app renders [`AlertSlot`] as a blocking modal.

/// Something that can put a message in front of the user
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Holds at most one alert awaiting acknowledgement.
///
/// A newer alert replaces an unacknowledged one, so repeated failed
/// attempts never stack dialogs.
#[derive(Debug, Default)]
pub struct AlertSlot {
    pending: Option<String>,
}

impl AlertSlot {
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn acknowledge(&mut self) {
        self.pending = None;
    }
}

impl Notifier for AlertSlot {
    fn notify(&mut self, message: &str) {
        self.pending = Some(message.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_alert_slot_lifecycle() {
        let mut slot = AlertSlot::default();
        assert!(!slot.is_open());

        slot.notify("first");
        slot.notify("second");
        assert_eq!(slot.pending(), Some("second"));

        slot.acknowledge();
        assert_eq!(slot.pending(), None);
    }
}
