mod common;

use std::sync::atomic::{AtomicUsize, Ordering};

use assert_matches::assert_matches;
use serde_json::json;

use masjid_client::error::ClientError;
use masjid_client::notify::Notice;
use masjid_client::transport::Method;
use masjid_client::DetailController;
use masjid_core::detail::DetailStatus;
use masjid_core::models::{
    Program, ProgramField, ProgramStatus, Stakeholder, StakeholderField, StakeholderKind,
};

use common::{harness, stakeholder_json, FakeTransport};

/// Backend that serves stakeholder 7 and echoes writes back with an id.
fn echo_backend() -> std::sync::Arc<FakeTransport> {
    FakeTransport::new(|request| match request.method {
        Method::Get => Ok(json!({"success": true, "data": stakeholder_json(7)})),
        Method::Post => {
            let mut body = request.body.clone().unwrap();
            body["id"] = json!(99);
            Ok(json!({"success": true, "data": body}))
        }
        Method::Put => Ok(json!({"success": true, "data": request.body.clone().unwrap()})),
        _ => Ok(json!({"success": true})),
    })
}

#[tokio::test]
async fn load_shows_entity() {
    let h = harness(echo_backend());
    let mut detail = DetailController::<Stakeholder>::new(h.ctx.clone());

    detail.load(&7).await.unwrap();

    assert_eq!(detail.status(), DetailStatus::Viewing);
    let entity = detail.entity().unwrap();
    assert_eq!(entity.id, Some(7));
    assert_eq!(entity.jenis, Some(StakeholderKind::Individual));
    assert_eq!(h.transport.requests()[0].path, "/api/stakeholders/7");
}

#[tokio::test]
async fn invalid_draft_is_never_sent() {
    let h = harness(echo_backend());
    let mut detail = DetailController::<Stakeholder>::new(h.ctx.clone());
    detail.load(&7).await.unwrap();
    detail.start_edit().unwrap();
    detail
        .edit(StakeholderField::Telepon("0812-ABC".to_string()))
        .unwrap();
    detail
        .edit(StakeholderField::Email("bukan-email".to_string()))
        .unwrap();

    let result = detail.save().await;

    assert_matches!(result, Err(ClientError::Invalid(errors)) => {
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["telepon", "email"]);
    });
    assert_eq!(h.transport.request_count(), 1);
    assert!(detail.is_editing());
    assert!(detail.field_errors().contains("telepon"));
    assert!(h.notices.is_empty());
}

#[tokio::test]
async fn editing_a_field_clears_only_its_error() {
    let h = harness(echo_backend());
    let mut detail = DetailController::<Stakeholder>::new(h.ctx.clone());
    detail.start_create().unwrap();
    assert!(detail.save().await.is_err());
    assert!(detail.field_errors().contains("nama_stakeholder"));
    assert!(detail.field_errors().contains("jenis"));

    detail
        .edit(StakeholderField::NamaStakeholder("Yayasan Amal".to_string()))
        .unwrap();

    assert!(!detail.field_errors().contains("nama_stakeholder"));
    assert!(detail.field_errors().contains("jenis"));
    assert_eq!(h.transport.request_count(), 0);
}

#[tokio::test]
async fn valid_edit_sends_one_put_and_leaves_edit_mode() {
    let h = harness(echo_backend());
    let mut detail = DetailController::<Stakeholder>::new(h.ctx.clone());
    detail.load(&7).await.unwrap();
    detail.start_edit().unwrap();
    detail
        .edit(StakeholderField::Alamat(Some("Jl. Merdeka 1".to_string())))
        .unwrap();

    let saved = detail.save().await.unwrap();

    assert_eq!(saved.alamat.as_deref(), Some("Jl. Merdeka 1"));
    assert_eq!(detail.status(), DetailStatus::Viewing);
    assert!(detail.draft().is_none());
    assert_eq!(detail.entity(), Some(&saved));

    let requests = h.transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].method, Method::Put);
    assert_eq!(requests[1].path, "/api/stakeholders/7");
    assert_eq!(requests[1].body.as_ref().unwrap()["id"], 7);
    assert_eq!(h.notices.drain(), vec![Notice::success("Stakeholder berhasil diperbarui")]);
}

#[tokio::test]
async fn create_posts_with_session_masjid() {
    let h = harness(echo_backend());
    let mut detail = DetailController::<Stakeholder>::new(h.ctx.clone());
    detail.start_create().unwrap();
    for update in [
        StakeholderField::NamaStakeholder("Yayasan Amal".to_string()),
        StakeholderField::Jenis(Some(StakeholderKind::Organization)),
        StakeholderField::Telepon("0211234567".to_string()),
        StakeholderField::Email("info@amal.or.id".to_string()),
    ] {
        detail.edit(update).unwrap();
    }

    let saved = detail.save().await.unwrap();

    assert_eq!(saved.id, Some(99));
    assert_eq!(saved.masjid_id, Some(1));
    let post = h.transport.requests().remove(0);
    assert_eq!(post.method, Method::Post);
    assert_eq!(post.path, "/api/stakeholders");
    assert_eq!(post.body.as_ref().unwrap()["masjid_id"], 1);
    assert_eq!(post.body.as_ref().unwrap()["jenis"], "organisasi");
}

#[tokio::test]
async fn cancel_restores_loaded_copy() {
    let h = harness(echo_backend());
    let mut detail = DetailController::<Stakeholder>::new(h.ctx.clone());
    detail.load(&7).await.unwrap();
    let original = detail.entity().cloned();
    detail.start_edit().unwrap();
    detail
        .edit(StakeholderField::NamaStakeholder("Diubah".to_string()))
        .unwrap();

    detail.cancel();

    assert_eq!(detail.status(), DetailStatus::Viewing);
    assert_eq!(detail.entity().cloned(), original);
    assert!(detail.draft().is_none());
    assert_eq!(h.transport.request_count(), 1);
}

#[tokio::test]
async fn failed_save_keeps_draft_open() {
    let transport = FakeTransport::new(|request| match request.method {
        Method::Put => Err(ClientError::Api {
            status: 422,
            message: "Email sudah terdaftar".to_string(),
        }),
        _ => Ok(stakeholder_json(7)),
    });
    let h = harness(transport);
    let mut detail = DetailController::<Stakeholder>::new(h.ctx.clone());
    detail.load(&7).await.unwrap();
    detail.start_edit().unwrap();
    detail
        .edit(StakeholderField::Email("lain@masjid.id".to_string()))
        .unwrap();

    let result = detail.save().await;

    assert_matches!(result, Err(ClientError::Api { status: 422, .. }));
    assert!(detail.is_editing());
    assert_eq!(detail.draft().unwrap().email, "lain@masjid.id");
    assert_eq!(detail.entity().unwrap().email, "s7@masjid.id");
    assert_eq!(detail.error(), Some("Email sudah terdaftar"));
    assert_eq!(h.errors(), vec![Notice::error("Email sudah terdaftar")]);
}

#[tokio::test]
async fn delete_resets_state() {
    let h = harness(echo_backend());
    let mut detail = DetailController::<Stakeholder>::new(h.ctx.clone());
    detail.load(&7).await.unwrap();

    detail.delete().await.unwrap();

    assert_eq!(detail.status(), DetailStatus::Idle);
    assert!(detail.entity().is_none());
    let delete = h.transport.requests().pop().unwrap();
    assert_eq!(delete.method, Method::Delete);
}

#[tokio::test]
async fn delete_without_loaded_entity_fails_locally() {
    let h = harness(echo_backend());
    let mut detail = DetailController::<Stakeholder>::new(h.ctx.clone());

    assert_matches!(detail.delete().await, Err(ClientError::MissingId));
    assert_eq!(h.transport.request_count(), 0);
}

#[tokio::test]
async fn status_only_write_response_still_succeeds() {
    let transport = FakeTransport::new(|request| match request.method {
        Method::Put => Ok(json!({"status": "success", "message": "Program berhasil diperbarui"})),
        _ => Ok(json!({
            "success": true,
            "data": {
                "id": 4,
                "nama_program": "Kajian Subuh",
                "status": "direncanakan",
                "anggaran": 500000,
                "tanggal_mulai": "2024-01-07",
                "masjid_id": 1
            }
        })),
    });
    let h = harness(transport);
    let mut detail = DetailController::<Program>::new(h.ctx.clone());
    detail.load(&4).await.unwrap();
    detail.start_edit().unwrap();
    detail
        .edit(ProgramField::Status(Some(ProgramStatus::Running)))
        .unwrap();

    let saved = detail.save().await.unwrap();

    assert_eq!(saved.id, Some(4));
    assert_eq!(saved.status, Some(ProgramStatus::Running));
    assert_eq!(saved.nama_program, "Kajian Subuh");
    assert_eq!(detail.status(), DetailStatus::Viewing);
    assert_eq!(detail.entity(), Some(&saved));
    assert_eq!(h.notices.drain(), vec![Notice::success("Program berhasil diperbarui")]);
}

#[tokio::test]
async fn failed_reload_discards_open_draft() {
    let loads = AtomicUsize::new(0);
    let transport = FakeTransport::new(move |request| match request.method {
        Method::Get if loads.fetch_add(1, Ordering::SeqCst) > 0 => {
            Err(ClientError::Api {
                status: 500,
                message: String::new(),
            })
        }
        _ => Ok(json!({"success": true, "data": stakeholder_json(7)})),
    });
    let h = harness(transport);
    let mut detail = DetailController::<Stakeholder>::new(h.ctx.clone());
    detail.load(&7).await.unwrap();
    detail.start_edit().unwrap();
    detail
        .edit(StakeholderField::NamaStakeholder("Draft".to_string()))
        .unwrap();

    assert!(detail.load(&7).await.is_err());

    assert_eq!(detail.status(), DetailStatus::Viewing);
    assert!(detail.draft().is_none());
    assert_eq!(detail.entity().unwrap().nama_stakeholder, "Stakeholder 7");
    detail.start_edit().unwrap();
    detail
        .edit(StakeholderField::NamaStakeholder("Lagi".to_string()))
        .unwrap();
    assert_eq!(detail.draft().unwrap().nama_stakeholder, "Lagi");
}
