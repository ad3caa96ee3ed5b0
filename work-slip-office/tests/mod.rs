use actix_web::{http::StatusCode, test, web, App, HttpServer};
use base64::{engine::general_purpose::STANDARD, Engine};
use domain_workslip::{
    model::{
        entity::WorkSlip,
        vo::{Area, AreaFlags, Credentials, TechnicalReport},
    },
    service::WorkSlipService,
};
use indoc::indoc;
use infrastructure_client::RemoteWorkSlipService;
use sea_orm::ConnectionTrait;
use serde_json::{json, Value};
use service_workslip::{StaticAccount, StaticAuthSettings};
use tempfile::TempDir;
use url::Url;
use work_slip_office::{
    api,
    infrastructure::{
        config::{DatabaseConfig, OfficeConfig},
        ServiceProvider,
    },
};

fn database_url(dir: &TempDir) -> String {
    DatabaseConfig::sqlite_url(&dir.path().join("workslips.db").display().to_string())
}

async fn provider(dir: &TempDir) -> ServiceProvider {
    let config = OfficeConfig {
        db: DatabaseConfig {
            url: database_url(dir),
        },
        auth: StaticAuthSettings {
            accounts: vec![
                StaticAccount {
                    username: "joyce".to_owned(),
                    password: "secret".to_owned(),
                },
                StaticAccount {
                    username: "rey".to_owned(),
                    password: "tech-pass".to_owned(),
                },
            ],
            ..Default::default()
        },
        ..Default::default()
    };
    ServiceProvider::build(config).await.unwrap()
}

macro_rules! app {
    ($sp:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($sp))
                .configure(api::configure),
        )
        .await
    };
}

fn basic(username: &str, password: &str) -> (&'static str, String) {
    (
        "Authorization",
        format!("Basic {}", STANDARD.encode(format!("{username}:{password}"))),
    )
}

fn slip_body(id: &str, so_number: &str, area: &str, offices: &[&str]) -> Value {
    request_body(id, so_number, area, offices, "Computer isolation")
}

fn request_body(id: &str, so_number: &str, area: &str, offices: &[&str], request: &str) -> Value {
    let mut body = json!({
        "id": id,
        "soNumber": so_number,
        "date": "2025-04-15",
        "offices": offices,
        "timeStarted": "08:00",
        "timeEnded": "09:00",
        "technicalReports": [
            { "request": request, "actionDone": "", "recommendation": "" }
        ],
        "technicianName": "Joyce Israel",
    });
    body[area] = json!(true);
    body
}

#[actix_web::test]
async fn created_slip_reads_back_normalized() {
    let dir = tempfile::tempdir().unwrap();
    let app = app!(provider(&dir).await);

    let req = test::TestRequest::post()
        .uri("/api/slips")
        .set_json(request_body(
            "slip-1",
            "25-000001",
            "areaOnSite",
            &["CEO – Motorpool", "Tourism"],
            "Hardware installation and checking",
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert!(created["createdAt"].is_string());

    let req = test::TestRequest::get().uri("/api/slips/slip-1").to_request();
    let stored: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored, created);
    assert_eq!(stored["quarter"], 2);
    assert_eq!(stored["offices"], json!(["CEO – Motorpool", "Tourism"]));
    assert_eq!(stored["areaOnSite"], true);
    assert_eq!(stored["areaInHouse"], false);
    assert_eq!(stored["actionDone"], "Hardware installation and checking");
    assert_eq!(
        stored["technicalReports"][0]["request"],
        "Hardware installation and checking"
    );
}

#[actix_web::test]
async fn missing_id_is_generated() {
    let dir = tempfile::tempdir().unwrap();
    let app = app!(provider(&dir).await);

    let mut body = slip_body("", "25-000002", "areaInHouse", &["CTO"]);
    body.as_object_mut().unwrap().remove("id");
    let req = test::TestRequest::post().uri("/api/slips").set_json(body).to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert!(created["id"].as_str().unwrap().starts_with("slip-"));
}

#[actix_web::test]
async fn duplicate_so_number_is_rejected_and_first_kept() {
    let dir = tempfile::tempdir().unwrap();
    let app = app!(provider(&dir).await);

    let req = test::TestRequest::post()
        .uri("/api/slips")
        .set_json(slip_body("slip-1", "25-000001", "areaInHouse", &["CTO"]))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let mut second = slip_body("slip-2", "25-000001", "areaOnSite", &["Tourism"]);
    second["technicianName"] = json!("Someone Else");
    let req = test::TestRequest::post().uri("/api/slips").set_json(second).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "SO number already exists" }));

    let req = test::TestRequest::get().uri("/api/slips").to_request();
    let slips: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(slips.len(), 1);
    assert_eq!(slips[0]["id"], "slip-1");
    assert_eq!(slips[0]["technicianName"], "Joyce Israel");
}

#[actix_web::test]
async fn blank_so_number_and_bad_json_are_bad_requests() {
    let dir = tempfile::tempdir().unwrap();
    let app = app!(provider(&dir).await);

    let req = test::TestRequest::post()
        .uri("/api/slips")
        .set_json(slip_body("slip-1", "  ", "areaInHouse", &["CTO"]))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/slips")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn unknown_slip_is_not_found_and_delete_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let app = app!(provider(&dir).await);

    let req = test::TestRequest::post()
        .uri("/api/slips")
        .set_json(slip_body("slip-1", "25-000001", "areaInHouse", &["CTO"]))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/api/slips/slip-404").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Slip not found" }));

    let req = test::TestRequest::delete().uri("/api/slips/slip-404").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);
    let req = test::TestRequest::get().uri("/api/slips").to_request();
    let slips: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(slips.len(), 1);

    let req = test::TestRequest::delete().uri("/api/slips/slip-1").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);
    let req = test::TestRequest::get().uri("/api/slips").to_request();
    let slips: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert!(slips.is_empty());
}

#[actix_web::test]
async fn replace_needs_the_super_admin() {
    let dir = tempfile::tempdir().unwrap();
    let app = app!(provider(&dir).await);

    let req = test::TestRequest::post()
        .uri("/api/slips")
        .set_json(slip_body("slip-1", "25-000001", "areaInHouse", &["CTO"]))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    let mut edited = slip_body("slip-1", "25-000001", "areaInHouse", &["CTO", "CBO"]);
    edited["approvedBy"] = json!("Dir. Santos");

    let req = test::TestRequest::put()
        .uri("/api/slips/slip-1")
        .set_json(edited.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::put()
        .uri("/api/slips/slip-1")
        .insert_header(basic("rey", "tech-pass"))
        .set_json(edited.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::put()
        .uri("/api/slips/slip-1")
        .insert_header(basic("Joyce", "secret"))
        .set_json(edited)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let replaced: Value = test::read_body_json(resp).await;
    assert_eq!(replaced["createdAt"], created["createdAt"]);

    let req = test::TestRequest::get().uri("/api/slips/slip-1").to_request();
    let stored: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored["offices"], json!(["CTO", "CBO"]));
    assert_eq!(stored["approvedBy"], "Dir. Santos");
    assert_eq!(stored["createdAt"], created["createdAt"]);
}

#[actix_web::test]
async fn replace_of_unknown_slip_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let app = app!(provider(&dir).await);

    let req = test::TestRequest::put()
        .uri("/api/slips/slip-404")
        .insert_header(basic("joyce", "secret"))
        .set_json(slip_body("slip-404", "25-000001", "areaInHouse", &["CTO"]))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn session_reports_identity() {
    let dir = tempfile::tempdir().unwrap();
    let app = app!(provider(&dir).await);

    let req = test::TestRequest::post()
        .uri("/api/session")
        .set_json(json!({ "username": " JOYCE ", "password": "secret" }))
        .to_request();
    let identity: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(identity, json!({ "username": "JOYCE", "isSuperAdmin": true }));

    let req = test::TestRequest::post()
        .uri("/api/session")
        .set_json(json!({ "username": "rey", "password": "tech-pass" }))
        .to_request();
    let identity: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(identity["isSuperAdmin"], false);

    let req = test::TestRequest::post()
        .uri("/api/session")
        .set_json(json!({ "username": "rey", "password": "wrong" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn summary_counts_each_area_once() {
    let dir = tempfile::tempdir().unwrap();
    let app = app!(provider(&dir).await);

    for body in [
        slip_body("slip-1", "25-000001", "areaInHouse", &["CTO"]),
        slip_body("slip-2", "25-000002", "areaOnSite", &["Tourism"]),
    ] {
        let req = test::TestRequest::post().uri("/api/slips").set_json(body).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/api/reports/summary").to_request();
    let summary: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(summary["total"], 2);
    assert_eq!(
        summary["byArea"],
        json!({ "inHouse": 1, "onSite": 1, "interagency": 0 })
    );

    let req = test::TestRequest::get()
        .uri("/api/reports/summary?area=inHouse&quarter=&search=")
        .to_request();
    let summary: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(summary["total"], 1);

    let req = test::TestRequest::get()
        .uri("/api/reports/summary?quarter=9")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn filtered_export_is_a_csv_download() {
    let dir = tempfile::tempdir().unwrap();
    let app = app!(provider(&dir).await);

    for body in [
        slip_body("slip-1", "25-000001", "areaInHouse", &["CTO"]),
        slip_body("slip-2", "25-000002", "areaOnSite", &["Tourism"]),
    ] {
        let req = test::TestRequest::post().uri("/api/slips").set_json(body).to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get()
        .uri("/api/export/slips.csv?office=Tourism")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let header = |name: &str| resp.headers().get(name).unwrap().to_str().unwrap().to_owned();
    assert_eq!(header("content-type"), "text/csv; charset=utf-8");
    assert!(header("content-disposition").starts_with("attachment; filename=\"SO-WorkSlip-Report-"));
    let body = test::read_body(resp).await;
    assert!(body.starts_with(b"\xEF\xBB\xBF"));
    let text = String::from_utf8(body[3..].to_vec()).unwrap();
    let lines: Vec<_> = text.split_terminator("\r\n").collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("\"25-000002\",\"2025-04-15\",\"Q2\",\"On Site\",\"Tourism\""));

    let req = test::TestRequest::get().uri("/api/export/totals.csv").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let text = String::from_utf8(body[3..].to_vec()).unwrap();
    assert!(text.contains("\"Total Slips\",\"2\""));
}

#[actix_web::test]
async fn database_of_earlier_deployment_opens_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let connection = sea_orm::Database::connect(database_url(&dir)).await.unwrap();
    connection
        .execute_unprepared(indoc! {"
            CREATE TABLE work_slips (
              id TEXT PRIMARY KEY,
              soNumber TEXT,
              date TEXT,
              areaInHouse INTEGER,
              areaOnSite INTEGER,
              areaInteragency INTEGER,
              offices TEXT,
              timeStarted TEXT,
              timeEnded TEXT,
              actionDone TEXT,
              recommendation TEXT,
              requesterSignature TEXT,
              technicianName TEXT,
              approvedBy TEXT,
              createdAt TEXT,
              printerBrand TEXT,
              printerModel TEXT,
              quarter INTEGER,
              technicalReports TEXT
            )
        "})
        .await
        .unwrap();
    connection
        .execute_unprepared(indoc! {"
            INSERT INTO work_slips (id, soNumber, date, areaInHouse, areaOnSite, areaInteragency,
              offices, actionDone, recommendation, technicianName, createdAt)
            VALUES ('slip-old', '24-000007', '2024-11-02', 0, 0, 1,
              '[\"PNP\"]', 'Printer isolation', 'Replace drum', 'Rey Ramos', '2024-11-02T03:04:05.000Z')
        "})
        .await
        .unwrap();
    connection
        .execute_unprepared(indoc! {"
            INSERT INTO work_slips (id, soNumber, date, areaInHouse, offices, actionDone, createdAt)
            VALUES ('slip-dup', '24-000007', '2024-11-03', 1, '[\"CTO\"]', 'Password recovery',
                '2024-11-03 08:00:00'),
              ('slip-odd', '24-000008', '2024-11-04', 1, 'PNP', 'Password recovery', 'last week')
        "})
        .await
        .unwrap();
    drop(connection);

    let app = app!(provider(&dir).await);
    let req = test::TestRequest::get().uri("/api/slips/slip-old").to_request();
    let slip: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(slip["quarter"], 4);
    assert_eq!(slip["areaInteragency"], true);
    assert_eq!(slip["offices"], json!(["PNP"]));
    assert_eq!(slip["technicalReports"][0]["request"], "Printer isolation");
    assert_eq!(slip["technicalReports"][0]["recommendation"], "Replace drum");
    assert_eq!(slip["createdAt"], "2024-11-02T03:04:05.000Z");

    let req = test::TestRequest::put()
        .uri("/api/slips/slip-dup")
        .insert_header(basic("joyce", "secret"))
        .set_json(slip_body("slip-dup", "24-000007", "areaInHouse", &["CTO"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let replaced: Value = test::read_body_json(resp).await;
    assert_eq!(replaced["createdAt"], "2024-11-03T08:00:00.000Z");

    let req = test::TestRequest::put()
        .uri("/api/slips/slip-dup")
        .insert_header(basic("joyce", "secret"))
        .set_json(slip_body("slip-dup", "24-000008", "areaInHouse", &["CTO"]))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::get().uri("/api/slips/slip-odd").to_request();
    let odd: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(odd["offices"], json!([]));
    let req = test::TestRequest::put()
        .uri("/api/slips/slip-odd")
        .insert_header(basic("joyce", "secret"))
        .set_json(slip_body("slip-odd", "24-000008", "areaInHouse", &["CTO"]))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let connection = sea_orm::Database::connect(database_url(&dir)).await.unwrap();
    let row = connection
        .query_one(sea_orm::Statement::from_string(
            connection.get_database_backend(),
            "SELECT createdAt FROM work_slips WHERE id = 'slip-odd'",
        ))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.try_get::<String>("", "createdAt").unwrap(), "last week");
}

fn work_slip(id: &str, so_number: &str) -> WorkSlip {
    WorkSlip {
        id: id.to_owned(),
        so_number: so_number.to_owned(),
        date: "2025-04-15".to_owned(),
        area: AreaFlags::only(Area::InHouse),
        offices: vec!["CTO".to_owned()],
        technical_reports: vec![TechnicalReport {
            request: "Software installation".to_owned(),
            ..Default::default()
        }],
        ..Default::default()
    }
}

#[actix_web::test]
async fn remote_client_talks_to_server() {
    let dir = tempfile::tempdir().unwrap();
    let sp = web::Data::new(provider(&dir).await);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(sp.clone())
            .configure(api::configure)
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    let remote = RemoteWorkSlipService::builder()
        .base_url(Url::parse(&format!("http://{addr}")).unwrap())
        .build();
    let created = remote.create(work_slip("slip-1", "25-000001")).await.unwrap();
    assert!(created.created_at.is_some());

    let err = remote.create(work_slip("slip-2", "25-000001")).await.unwrap_err();
    assert!(err.is_conflict());

    let mut edited = created.clone();
    edited.approved_by = "Dir. Santos".to_owned();
    assert!(remote.replace("slip-1", edited.clone()).await.is_err());
    let editor = remote.with_credentials(Credentials::new("joyce", "secret"));
    let replaced = editor.replace("slip-1", edited).await.unwrap();
    assert_eq!(replaced.created_at, created.created_at);

    assert_eq!(editor.list().await.unwrap().len(), 1);
    editor.delete("slip-1").await.unwrap();
    assert!(editor.get("slip-1").await.unwrap().is_none());

    handle.stop(true).await;
}
