use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use domain_intake::model::{IntakeForm, ReportField};
use domain_workslip::{
    exception::{WorkSlipException, WorkSlipResult},
    mock::{MockDraftRepo, MockSoCounterRepo, MockWorkSlipService},
    model::{
        entity::{DraftRecord, WorkSlip},
        vo::{Area, RequestType, RequiredField},
    },
    service::WorkSlipService,
};
use service_workslip::{
    DraftServiceImpl, Flash, IntakeSession, SoNumberServiceImpl, FLASH_DURATION,
};
use tokio::sync::Notify;

fn filled_form() -> IntakeForm {
    let mut form = IntakeForm::new(NaiveDate::from_ymd_opt(2025, 4, 15).unwrap());
    form.set_so_number("25-000001");
    form.select_area(Area::OnSite);
    form.toggle_office("CEO – Motorpool");
    form.set_time_started("08:00");
    form.set_time_ended("09:00");
    form.update_report_row(0, ReportField::Request, RequestType::ComputerIsolation.label());
    form.set_technician_name("Joyce Israel");
    form
}

fn this_year() -> i32 {
    chrono::Local::now().year() % 100
}

fn draft_service(
    drafts: MockDraftRepo,
    slips: Arc<dyn WorkSlipService>,
) -> Arc<DraftServiceImpl> {
    let mut counter = MockSoCounterRepo::new();
    counter
        .expect_load()
        .returning(|| Ok(Some(format!("{:02}-000004", this_year()))));
    counter.expect_store().returning(|_| Ok(()));
    Arc::new(
        DraftServiceImpl::builder()
            .draft_repo(Arc::new(drafts))
            .so_number_service(Arc::new(
                SoNumberServiceImpl::builder()
                    .counter_repo(Arc::new(counter))
                    .build(),
            ))
            .work_slip_service(slips)
            .build(),
    )
}

fn session(form: IntakeForm, slips: Arc<dyn WorkSlipService>) -> IntakeSession {
    IntakeSession::builder()
        .form(form)
        .draft_service(draft_service(MockDraftRepo::new(), slips.clone()))
        .work_slip_service(slips)
        .build()
}

#[tokio::test]
async fn successful_submit_flashes_and_keeps_form() {
    let mut slips = MockWorkSlipService::new();
    slips
        .expect_create()
        .withf(|el: &WorkSlip| el.quarter.number() == 2 && el.legacy_action_done() == "Computer isolation")
        .times(1)
        .returning(Ok);
    let session = session(filled_form(), Arc::new(slips));

    let created = session.submit().await.unwrap().unwrap();
    assert_eq!(created.so_number, "25-000001");
    assert_eq!(session.flash(), Some(Flash::Submitted));
    assert_eq!(session.form().await.so_number(), "25-000001");
    assert!(!session.is_submitting());

    let later = Instant::now() + FLASH_DURATION + Duration::from_millis(1);
    assert_eq!(session.flash_at(later), None);
}

#[tokio::test]
async fn conflict_is_reported_in_flash() {
    let mut slips = MockWorkSlipService::new();
    slips.expect_create().returning(|el| {
        Err(WorkSlipException::SoNumberConflict {
            so_number: el.so_number,
        })
    });
    let session = session(filled_form(), Arc::new(slips));

    let err = session.submit().await.unwrap().unwrap_err();
    assert!(err.is_conflict());
    match session.flash() {
        Some(Flash::Error(message)) => assert!(message.contains("25-000001")),
        other => panic!("unexpected flash {other:?}"),
    }
}

#[tokio::test]
async fn incomplete_form_touches_everything_and_sends_nothing() {
    let mut slips = MockWorkSlipService::new();
    slips.expect_create().never();
    let session = session(
        IntakeForm::new(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()),
        Arc::new(slips),
    );

    let err = session.submit().await.unwrap().unwrap_err();
    assert!(matches!(err, WorkSlipException::IncompleteSubmission { .. }));
    let form = session.form().await;
    assert!(form.is_touched(RequiredField::Technician));
    assert!(form.errors().contains_key(&RequiredField::SoNumber));
    assert_eq!(session.flash(), None);
}

/// Holds every create until released.
struct GatedService {
    gate: Notify,
}

#[async_trait]
impl WorkSlipService for GatedService {
    async fn list(&self) -> WorkSlipResult<Vec<WorkSlip>> {
        Ok(vec![])
    }

    async fn get(&self, _id: &str) -> WorkSlipResult<Option<WorkSlip>> {
        Ok(None)
    }

    async fn create(&self, slip: WorkSlip) -> WorkSlipResult<WorkSlip> {
        self.gate.notified().await;
        Ok(slip)
    }

    async fn replace(&self, _id: &str, slip: WorkSlip) -> WorkSlipResult<WorkSlip> {
        Ok(slip)
    }

    async fn delete(&self, _id: &str) -> WorkSlipResult<()> {
        Ok(())
    }
}

#[tokio::test]
async fn second_submit_is_ignored_while_first_in_flight() {
    let gated = Arc::new(GatedService {
        gate: Notify::new(),
    });
    let session = Arc::new(session(filled_form(), gated.clone()));

    let first = tokio::spawn({
        let session = session.clone();
        async move { session.submit().await }
    });
    while !session.is_submitting() {
        tokio::task::yield_now().await;
    }
    assert!(!session.can_submit().await);
    assert!(session.submit().await.is_none());

    gated.gate.notify_one();
    assert!(first.await.unwrap().unwrap().is_ok());
    assert!(session.can_submit().await);
}

#[tokio::test]
async fn draft_save_skips_validation_and_numbers_the_slip() {
    let mut drafts = MockDraftRepo::new();
    drafts
        .expect_insert()
        .withf(|el: &DraftRecord| el.slip().so_number == format!("{:02}-000005", this_year()))
        .times(1)
        .returning(|el| Ok(el.id().to_owned()));
    drafts.expect_save_changed().returning(|| Ok(true));
    let slips: Arc<dyn WorkSlipService> = Arc::new(MockWorkSlipService::new());
    let session = IntakeSession::builder()
        .form(IntakeForm::new(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()))
        .draft_service(draft_service(drafts, slips.clone()))
        .work_slip_service(slips)
        .build();

    let draft = session.save_draft().await.unwrap();
    assert!(draft.id().starts_with("draft-"));
    assert_eq!(session.flash(), Some(Flash::DraftSaved));
}

#[tokio::test]
async fn resumed_draft_replaces_form() {
    let stored = DraftRecord::new(filled_form().to_draft(), chrono::Utc::now());
    let id = stored.id().to_owned();
    let mut drafts = MockDraftRepo::new();
    drafts
        .expect_get_by_id()
        .returning(move |_| Ok(Some(stored.clone())));
    let slips: Arc<dyn WorkSlipService> = Arc::new(MockWorkSlipService::new());
    let session = IntakeSession::builder()
        .form(IntakeForm::new(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()))
        .draft_service(draft_service(drafts, slips.clone()))
        .work_slip_service(slips)
        .build();

    assert!(session.resume_draft(&id).await.unwrap());
    let form = session.form().await;
    assert_eq!(form.offices(), ["CEO – Motorpool"]);
    assert!(form.can_submit());
}
