//! One-shot signal from the rendering layer that activity markup exists.

use std::sync::Arc;

use aula_core::schedule::Schedule;
use tokio::sync::watch;

/// Publishing half, held by whatever renders the schedule.
#[derive(Debug, Clone)]
pub struct ScheduleReady {
    tx: Arc<watch::Sender<Option<Schedule>>>,
}

/// Waiting half, consumed by a single initialization.
#[derive(Debug)]
pub struct ScheduleWaiter {
    rx: watch::Receiver<Option<Schedule>>,
}

#[must_use]
pub fn readiness() -> (ScheduleReady, ScheduleWaiter) {
    let (tx, rx) = watch::channel(None);
    (ScheduleReady { tx: Arc::new(tx) }, ScheduleWaiter { rx })
}

impl ScheduleReady {
    /// Announce the rendered schedule. Empty schedules do not wake the waiter.
    pub fn publish(&self, schedule: Schedule) {
        self.tx.send_replace(Some(schedule));
    }
}

impl ScheduleWaiter {
    /// Wait until a schedule with at least one activity is published.
    ///
    /// Returns `None` if every publisher is dropped first.
    pub async fn wait(mut self) -> Option<Schedule> {
        let ready = self
            .rx
            .wait_for(|s| s.as_ref().is_some_and(|s| !s.is_empty()))
            .await
            .ok()?;
        (*ready).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aula_core::model::{ActivityGroup, ActivityItem};
    use std::time::Duration;

    fn one_item() -> Schedule {
        Schedule::new(vec![ActivityGroup::new(
            "Día",
            vec![ActivityItem::new("Leer", "8:00 - 9:00", "fas fa-book")],
        )])
    }

    #[tokio::test]
    async fn waits_past_empty_schedules() {
        let (ready, waiter) = readiness();
        let handle = tokio::spawn(waiter.wait());

        ready.publish(Schedule::default());
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!handle.is_finished());

        ready.publish(one_item());
        let schedule = handle.await.unwrap().expect("schedule");
        assert_eq!(schedule.activity_count(), 1);
    }

    #[tokio::test]
    async fn already_published_resolves_immediately() {
        let (ready, waiter) = readiness();
        ready.publish(one_item());
        assert!(waiter.wait().await.is_some());
    }

    #[tokio::test]
    async fn dropped_publisher_yields_none() {
        let (ready, waiter) = readiness();
        drop(ready);
        assert!(waiter.wait().await.is_none());
    }
}
