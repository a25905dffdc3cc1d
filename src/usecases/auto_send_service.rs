//! Auto-send use case: save per-contact schedules and fire due messages.
//!
//! Orchestrates HouseholdRepo and MessagingService. The loop does not block
//! the runtime; it sleeps with tokio::time::sleep between ticks.

use crate::domain::schedule::{self, describe_schedule, describe_schedule_confirmation};
use crate::domain::{
    AutoSendSettings, Contact, ContactRole, DayOfWeek, DeliveryResult, DomainError, MessageKind,
    TaskSelection,
};
use crate::ports::HouseholdRepo;
use crate::usecases::messaging_service::MessagingService;
use chrono::{Datelike, FixedOffset, NaiveDateTime};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Result of saving settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsUpdate {
    /// Preview string for the settings screen.
    pub description: String,
    /// Confirmation delivery, when auto-send was switched on.
    pub confirmation: Option<DeliveryResult>,
}

/// Counters for one scheduler pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub sent: usize,
    /// Due, but there was nothing to report.
    pub skipped: usize,
    pub failed: usize,
}

pub struct AutoSendService {
    repo: Arc<dyn HouseholdRepo>,
    messaging: Arc<MessagingService>,
    /// Household clock.
    offset: FixedOffset,
    tick: Duration,
}

impl AutoSendService {
    pub fn new(
        repo: Arc<dyn HouseholdRepo>,
        messaging: Arc<MessagingService>,
        offset: FixedOffset,
        tick: Duration,
    ) -> Self {
        Self {
            repo,
            messaging,
            offset,
            tick,
        }
    }

    /// Validate and store settings. When auto-send is on, the contact gets a
    /// confirmation sentence in the settings' language.
    pub async fn update_settings(
        &self,
        contact_id: &str,
        settings: &AutoSendSettings,
    ) -> Result<SettingsUpdate, DomainError> {
        schedule::validate(settings)?;
        let contact = self.messaging.contact(contact_id).await?;
        self.repo.save_auto_send_settings(contact_id, settings).await?;

        let description = describe_schedule(settings);
        info!(contact_id, schedule = %description, "auto-send settings saved");

        let confirmation = if settings.auto_send {
            let text = describe_schedule_confirmation(settings, settings.preferred_language);
            Some(
                self.messaging
                    .send(&contact, MessageKind::Confirmation, &text)
                    .await?,
            )
        } else {
            None
        };

        Ok(SettingsUpdate {
            description,
            confirmation,
        })
    }

    /// Send every message whose next fire time after `from` is at or before `to`.
    ///
    /// Cooks get that day's meal plan, everyone else the tasks due that day,
    /// in the language from their auto-send settings. Per-contact failures are
    /// logged and counted; they do not stop the pass.
    pub async fn run_cycle(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<CycleReport, DomainError> {
        let mut report = CycleReport::default();
        for contact in self.repo.list_contacts().await? {
            let settings = match self.repo.get_auto_send_settings(&contact.id).await {
                Ok(s) => s,
                Err(e) => {
                    warn!(contact_id = %contact.id, error = %e, "Failed to load auto-send settings");
                    report.failed += 1;
                    continue;
                }
            };
            let Some(fire_at) = schedule::next_occurrence(&settings, from) else {
                continue;
            };
            if fire_at > to {
                continue;
            }

            let day = DayOfWeek::from(fire_at.weekday());
            match self.send_due(&contact, &settings, day).await {
                Ok(true) => report.sent += 1,
                Ok(false) => {
                    info!(contact_id = %contact.id, day = day.as_str(), "Nothing due; skipped");
                    report.skipped += 1;
                }
                Err(e) => {
                    warn!(contact_id = %contact.id, error = %e, "Auto-send failed for contact");
                    report.failed += 1;
                }
            }
        }
        Ok(report)
    }

    /// Compose and send one contact's scheduled message. `Ok(false)` when
    /// there was nothing to send.
    async fn send_due(
        &self,
        contact: &Contact,
        settings: &AutoSendSettings,
        day: DayOfWeek,
    ) -> Result<bool, DomainError> {
        let recipient = Contact {
            preferred_language: settings.preferred_language,
            ..contact.clone()
        };
        let (kind, message) = match contact.role {
            ContactRole::Cook => (
                MessageKind::Meals,
                self.messaging.preview_meals(&recipient, day, None).await?,
            ),
            _ => (
                MessageKind::Tasks,
                self.messaging
                    .preview_tasks(&recipient, TaskSelection::DueOn(day))
                    .await?,
            ),
        };
        if !message.is_sendable() {
            return Ok(false);
        }
        self.messaging.send(&recipient, kind, &message.text).await?;
        Ok(true)
    }

    fn now_local(&self) -> NaiveDateTime {
        chrono::Utc::now().with_timezone(&self.offset).naive_local()
    }

    /// Run the scheduler loop. Each tick covers the window since the previous
    /// tick, so a fire time is never handled twice. Runs until the task is dropped.
    pub async fn run_loop(&self) -> Result<(), DomainError> {
        info!(
            tick_secs = self.tick.as_secs(),
            offset = %self.offset,
            "Auto-send scheduler started"
        );
        self.run_ticks(|| Some(self.now_local())).await;
        Ok(())
    }

    /// Tick loop over `clock`, which yields the local time at each tick.
    /// Stops when the clock yields `None`.
    async fn run_ticks(&self, mut clock: impl FnMut() -> Option<NaiveDateTime>) {
        let Some(mut last) = clock() else {
            return;
        };
        loop {
            tokio::time::sleep(self.tick).await;
            let Some(now) = clock() else {
                return;
            };
            match self.run_cycle(last, now).await {
                Ok(report) if report != CycleReport::default() => {
                    info!(
                        sent = report.sent,
                        skipped = report.skipped,
                        failed = report.failed,
                        "Scheduler cycle complete"
                    );
                }
                Ok(_) => {}
                Err(e) => warn!(error = %e, "Scheduler cycle failed"),
            }
            last = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::persistence::MemoryRepo;
    use crate::adapters::whatsapp::RecordingTransport;
    use crate::domain::{
        DailyPlan, Frequency, LanguageCode, MealEntry, MealSlot, PhraseDictionary, TaskItem,
    };
    use crate::ports::DeliveryLogPort;
    use chrono::NaiveDate;

    struct Fixture {
        repo: Arc<MemoryRepo>,
        transport: Arc<RecordingTransport>,
        service: AutoSendService,
    }

    fn fixture() -> Fixture {
        fixture_with_tick(Duration::from_secs(60))
    }

    fn fixture_with_tick(tick: Duration) -> Fixture {
        let repo = Arc::new(MemoryRepo::new());
        let transport = Arc::new(RecordingTransport::new());
        let messaging = Arc::new(MessagingService::new(
            repo.clone(),
            repo.clone(),
            transport.clone(),
            Arc::new(PhraseDictionary::builtin()),
        ));
        let offset = FixedOffset::east_opt(330 * 60).unwrap();
        let service = AutoSendService::new(repo.clone(), messaging, offset, tick);
        Fixture {
            repo,
            transport,
            service,
        }
    }

    fn contact(id: &str, role: ContactRole) -> Contact {
        Contact {
            id: id.into(),
            name: id.to_uppercase(),
            phone: format!("+91 9876500{}", id.len()),
            role,
            preferred_language: LanguageCode::English,
        }
    }

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        // January 2024: the 1st is a Monday
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn test_update_settings_sends_localized_confirmation() {
        let f = fixture();
        f.repo.save_contact(&contact("maid", ContactRole::Maid)).await.unwrap();
        let settings = AutoSendSettings {
            auto_send: true,
            send_time: "18:30".into(),
            frequency: Frequency::Weekly,
            days_of_week: vec![DayOfWeek::Friday, DayOfWeek::Monday],
            preferred_language: LanguageCode::Hindi,
        };
        let update = f.service.update_settings("maid", &settings).await.unwrap();
        assert_eq!(update.description, "Weekly on Monday, Friday at 18:30");
        assert!(update.confirmation.is_some());

        let sent = f.transport.sent().await;
        assert_eq!(sent.len(), 1);
        assert!(sent[0].text.contains("सोमवार, शुक्रवार"));
        assert_eq!(
            f.repo.get_auto_send_settings("maid").await.unwrap(),
            settings
        );
        let log = f.repo.recent_deliveries(1).await.unwrap();
        assert_eq!(log[0].kind, MessageKind::Confirmation);
    }

    #[tokio::test]
    async fn test_update_settings_rejects_invalid_and_keeps_old() {
        let f = fixture();
        f.repo.save_contact(&contact("maid", ContactRole::Maid)).await.unwrap();
        let bad = AutoSendSettings {
            auto_send: true,
            frequency: Frequency::Weekly,
            days_of_week: vec![],
            ..AutoSendSettings::default()
        };
        assert!(matches!(
            f.service.update_settings("maid", &bad).await,
            Err(DomainError::InvalidSchedule(_))
        ));
        assert_eq!(
            f.repo.get_auto_send_settings("maid").await.unwrap(),
            AutoSendSettings::default()
        );
        assert!(f.transport.sent().await.is_empty());
    }

    #[tokio::test]
    async fn test_disabling_sends_nothing() {
        let f = fixture();
        f.repo.save_contact(&contact("maid", ContactRole::Maid)).await.unwrap();
        let update = f
            .service
            .update_settings("maid", &AutoSendSettings::default())
            .await
            .unwrap();
        assert_eq!(update.description, "Auto-send disabled");
        assert_eq!(update.confirmation, None);
        assert!(f.transport.sent().await.is_empty());
    }

    #[tokio::test]
    async fn test_run_cycle_sends_role_specific_messages() {
        let f = fixture();
        let daily_at_8 = AutoSendSettings {
            auto_send: true,
            ..AutoSendSettings::default()
        };
        for (id, role) in [("maid", ContactRole::Maid), ("cook", ContactRole::Cook)] {
            f.repo.save_contact(&contact(id, role)).await.unwrap();
            f.repo.save_auto_send_settings(id, &daily_at_8).await.unwrap();
        }
        f.repo
            .save_tasks(&[TaskItem {
                task_category: Some("daily".into()),
                ..TaskItem::new("t1", "Sweep floor")
            }])
            .await
            .unwrap();
        let mut plan = DailyPlan::default();
        plan.breakfast.push(MealEntry::new("m1", "Idli", MealSlot::Breakfast));
        f.repo.save_daily_plan(DayOfWeek::Monday, &plan).await.unwrap();

        let report = f.service.run_cycle(at(1, 7, 59), at(1, 8, 0)).await.unwrap();
        assert_eq!(report, CycleReport { sent: 2, skipped: 0, failed: 0 });

        let sent = f.transport.sent().await;
        assert!(sent.iter().any(|m| m.text.contains("📋 Tasks for Monday:")));
        assert!(sent.iter().any(|m| m.text.contains("🍽️ Meal plan for Monday:")));
    }

    #[tokio::test]
    async fn test_run_cycle_window_is_half_open() {
        let f = fixture();
        f.repo.save_contact(&contact("maid", ContactRole::Maid)).await.unwrap();
        f.repo
            .save_auto_send_settings(
                "maid",
                &AutoSendSettings {
                    auto_send: true,
                    ..AutoSendSettings::default()
                },
            )
            .await
            .unwrap();
        f.repo
            .save_tasks(&[TaskItem {
                task_category: Some("daily".into()),
                ..TaskItem::new("t1", "Make bed")
            }])
            .await
            .unwrap();

        // before the fire time
        let report = f.service.run_cycle(at(1, 7, 0), at(1, 7, 59)).await.unwrap();
        assert_eq!(report.sent, 0);
        // fire time is the window's end: sent
        let report = f.service.run_cycle(at(1, 7, 59), at(1, 8, 0)).await.unwrap();
        assert_eq!(report.sent, 1);
        // fire time is the window's start: already handled
        let report = f.service.run_cycle(at(1, 8, 0), at(1, 8, 1)).await.unwrap();
        assert_eq!(report.sent, 0);
    }

    #[tokio::test]
    async fn test_run_cycle_skips_empty_and_counts_failures() {
        let f = fixture();
        let settings = AutoSendSettings {
            auto_send: true,
            ..AutoSendSettings::default()
        };
        f.repo.save_contact(&contact("cook", ContactRole::Cook)).await.unwrap();
        f.repo.save_auto_send_settings("cook", &settings).await.unwrap();

        // no meals planned: sentinel, not sent
        let report = f.service.run_cycle(at(2, 7, 0), at(2, 9, 0)).await.unwrap();
        assert_eq!(report, CycleReport { sent: 0, skipped: 1, failed: 0 });

        let mut plan = DailyPlan::default();
        plan.dinner.push(MealEntry::new("m1", "Chapati", MealSlot::Dinner));
        f.repo.save_daily_plan(DayOfWeek::Tuesday, &plan).await.unwrap();
        f.transport.set_failing(true);
        let report = f.service.run_cycle(at(2, 7, 0), at(2, 9, 0)).await.unwrap();
        assert_eq!(report, CycleReport { sent: 0, skipped: 0, failed: 1 });
    }

    #[tokio::test]
    async fn test_tick_loop_hands_window_over() {
        let f = fixture_with_tick(Duration::from_millis(1));
        f.repo.save_contact(&contact("maid", ContactRole::Maid)).await.unwrap();
        f.repo
            .save_auto_send_settings(
                "maid",
                &AutoSendSettings {
                    auto_send: true,
                    ..AutoSendSettings::default()
                },
            )
            .await
            .unwrap();
        f.repo
            .save_tasks(&[TaskItem {
                task_category: Some("daily".into()),
                ..TaskItem::new("t1", "Sweep floor")
            }])
            .await
            .unwrap();

        // 08:00 falls inside the second window only; the repeated 08:01 ticks
        // have empty windows, and the next day's 08:00 fires once more.
        let mut ticks = vec![
            at(1, 7, 58),
            at(1, 7, 59),
            at(1, 8, 1),
            at(1, 8, 1),
            at(1, 8, 2),
            at(2, 7, 59),
            at(2, 8, 0),
            at(2, 8, 0),
        ]
        .into_iter();
        f.service.run_ticks(|| ticks.next()).await;

        let sent = f.transport.sent().await;
        assert_eq!(sent.len(), 2);
        assert!(sent.iter().all(|m| m.text.contains("Sweep")));
    }
}
