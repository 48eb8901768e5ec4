use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::client::collaborators::{Confirmer, MockSessionProvider};
use crate::client::notify::{Notification, Notifier};
use crate::models::job_source::{JobSource, SourceType};

/// A row created `age_minutes` before a fixed instant.
pub fn row(owner: Uuid, name: &str, age_minutes: i64) -> JobSource {
    let base = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    JobSource {
        id: Uuid::new_v4(),
        user_id: owner,
        name: name.to_string(),
        url: format!("https://{}.example", name.to_lowercase().replace(' ', "-")),
        source_type: SourceType::Company,
        is_active: true,
        created_at: base - Duration::minutes(age_minutes),
    }
}

pub fn signed_in(owner: Uuid) -> MockSessionProvider {
    let mut session = MockSessionProvider::new();
    session.expect_current_user().returning(move || Some(owner));
    session
}

#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.sent.lock().unwrap())
    }

    pub fn titles(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.title.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.sent.lock().unwrap().push(notification);
    }
}

pub struct ScriptedConfirm {
    answer: bool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Confirmer for ScriptedConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer
    }
}
