use crate::domain::models::StorageSystem;
use anyhow::Result;

/// Callback invoked when the operator picks a storage system in the panel.
///
/// Called once per click (or Enter on the highlighted entry), synchronously,
/// from the iteration of the event loop that handled the input.
#[cfg_attr(test, mockall::automock)]
pub trait SelectionHandler: Send {
    fn on_select(&mut self, system: &StorageSystem);
}

/// Selection handler used by the `storenav` binary: remembers the last pick so
/// it can be written to stdout once the terminal is restored.
#[derive(Debug, Default)]
pub struct PickerSelection {
    last: Option<StorageSystem>,
    count: usize,
}

impl PickerSelection {
    #[must_use]
    pub fn last(&self) -> Option<&StorageSystem> {
        self.last.as_ref()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn to_json_line(&self) -> Result<Option<String>> {
        self.last
            .as_ref()
            .map(|system| serde_json::to_string(system).map_err(Into::into))
            .transpose()
    }
}

impl SelectionHandler for PickerSelection {
    fn on_select(&mut self, system: &StorageSystem) {
        tracing::info!(id = %system.id, name = %system.name, status = %system.status, "storage system selected");
        self.count += 1;
        self.last = Some(system.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::HealthStatus;

    #[test]
    fn test_picker_keeps_last_selection() {
        let mut picker = PickerSelection::default();
        assert!(picker.to_json_line().unwrap().is_none());

        picker.on_select(&StorageSystem::new("1", "Alpha", HealthStatus::Healthy));
        picker.on_select(&StorageSystem::new("2", "Beta", HealthStatus::Critical));

        assert_eq!(picker.count(), 2);
        assert_eq!(picker.last().map(|s| s.name.as_str()), Some("Beta"));
        assert_eq!(
            picker.to_json_line().unwrap().as_deref(),
            Some(r#"{"id":"2","name":"Beta","status":"critical"}"#)
        );
    }
}
