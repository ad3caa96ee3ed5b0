use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

use domain_intake::model::IntakeForm;
use domain_workslip::{
    exception::{WorkSlipException, WorkSlipResult},
    model::entity::{DraftRecord, WorkSlip},
    service::{DraftService, WorkSlipService},
};
use tokio::sync::Mutex;

/// How long an outcome message stays visible.
pub const FLASH_DURATION: Duration = Duration::from_secs(3);

/// Outcome message of the last submit or draft save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flash {
    Submitted,
    DraftSaved,
    Error(String),
}

/// One user filling in one intake form.
///
/// At most one submission is in flight; the form is left as it is after a
/// successful submit.
#[derive(typed_builder::TypedBuilder)]
pub struct IntakeSession {
    #[builder(setter(transform = |form: IntakeForm| Mutex::new(form)))]
    form: Mutex<IntakeForm>,
    work_slip_service: Arc<dyn WorkSlipService>,
    draft_service: Arc<dyn DraftService>,
    #[builder(default, setter(skip))]
    submitting: AtomicBool,
    #[builder(default, setter(skip))]
    flash: std::sync::Mutex<Option<(Flash, Instant)>>,
}

impl IntakeSession {
    /// Applies `change` to the form.
    pub async fn edit<R>(&self, change: impl FnOnce(&mut IntakeForm) -> R) -> R {
        change(&mut *self.form.lock().await)
    }

    pub async fn form(&self) -> IntakeForm {
        self.form.lock().await.clone()
    }

    /// Replaces the form with the saved draft `id`; returns whether the
    /// draft exists.
    pub async fn resume_draft(&self, id: &str) -> WorkSlipResult<bool> {
        let Some(draft) = self.draft_service.get(id).await? else {
            return Ok(false);
        };
        *self.form.lock().await = IntakeForm::from_draft(&draft);
        Ok(true)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    pub async fn can_submit(&self) -> bool {
        !self.is_submitting() && self.form.lock().await.can_submit()
    }

    /// Submits the form. Returns `None` when another submission is still in
    /// flight. Missing fields are marked touched and reported without a
    /// flash.
    pub async fn submit(&self) -> Option<WorkSlipResult<WorkSlip>> {
        let submission = {
            let mut form = self.form.lock().await;
            form.touch_all();
            let missing = form.missing();
            if !missing.is_empty() {
                return Some(Err(WorkSlipException::IncompleteSubmission { missing }));
            }
            form.to_submission()
        };
        if self
            .submitting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return None;
        }
        self.set_flash(None);

        let result = self.work_slip_service.create(submission).await;
        self.submitting.store(false, Ordering::Release);
        match &result {
            Ok(slip) => {
                tracing::info!(so_number = %slip.so_number, "Work slip submitted.");
                self.set_flash(Some(Flash::Submitted));
            }
            Err(e) => {
                tracing::warn!("Work slip submit failed: {e}");
                self.set_flash(Some(Flash::Error(e.to_string())));
            }
        }
        Some(result)
    }

    /// Saves the form as a draft, as typed.
    pub async fn save_draft(&self) -> WorkSlipResult<DraftRecord> {
        let slip = self.form.lock().await.to_draft();
        let result = self.draft_service.save(slip).await;
        self.set_flash(Some(match &result {
            Ok(_) => Flash::DraftSaved,
            Err(e) => Flash::Error(e.to_string()),
        }));
        result
    }

    fn set_flash(&self, flash: Option<Flash>) {
        if let Ok(mut shown) = self.flash.lock() {
            *shown = flash.map(|el| (el, Instant::now()));
        }
    }

    pub fn flash(&self) -> Option<Flash> {
        self.flash_at(Instant::now())
    }

    /// The flash as visible at `now`.
    pub fn flash_at(&self, now: Instant) -> Option<Flash> {
        let shown = self.flash.lock().ok()?;
        shown
            .as_ref()
            .filter(|(_, since)| now.saturating_duration_since(*since) < FLASH_DURATION)
            .map(|(flash, _)| flash.clone())
    }
}
