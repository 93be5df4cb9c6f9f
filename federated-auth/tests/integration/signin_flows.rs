use std::sync::Arc;

use tokio::sync::Notify;

use federated_auth::{
    BackendError, ConfigStore, NativeCredential, Principal, SignInFailureKind, SignInOutcome,
};

use crate::common::{remove_config, write_temp_config, StubBackend, StubCredentialSource};

async fn context_with(
    backend: Arc<StubBackend>,
    source: &str,
) -> federated_auth::AuthContext {
    let path = write_temp_config(source);
    let store = ConfigStore::from_path(&path);
    let ctx = federated_auth::init(backend, &store).await.unwrap();
    remove_config(&path);
    ctx
}

#[tokio::test]
async fn end_to_end_oidc_sign_in() {
    let backend = Arc::new(StubBackend::new());
    backend.script_handshake(Ok(Some(
        Principal::new("u1").with_email("a@b.com"),
    )));

    let ctx = context_with(
        backend.clone(),
        "oidc.provider.id=oidc.okta\noidc.scopes=openid,email\n",
    )
    .await;

    let outcome = ctx.flows().start_sign_in("oidc.okta").await;
    match outcome {
        SignInOutcome::Success { principal } => {
            assert_eq!(principal.id, "u1");
            assert_eq!(principal.email.as_deref(), Some("a@b.com"));
        }
        SignInOutcome::Failure { kind, message, .. } => {
            panic!("expected success, got {kind:?}: {message}")
        }
    }

    // The dispatched request carried the configured scopes verbatim.
    let request = backend.last_request().unwrap();
    assert_eq!(request.provider_ref, "oidc.okta");
    assert_eq!(request.scopes, vec!["openid", "email"]);

    // Ambient session state reflects the completed flow.
    assert!(ctx.session().is_authenticated());
    assert_eq!(
        ctx.session().current_principal().map(|p| p.id),
        Some("u1".to_string())
    );
}

#[tokio::test]
async fn second_start_resumes_pending_flow_instead_of_dispatching() {
    let backend = Arc::new(StubBackend::new());

    // First flow parks in its external-redirect phase until released.
    let gate = Arc::new(Notify::new());
    backend.gate_handshake(gate.clone());
    backend.script_handshake(Ok(Some(Principal::new("first"))));

    let ctx = Arc::new(context_with(backend.clone(), "oidc.provider.id=oidc.okta\n").await);

    let first = {
        let ctx = ctx.clone();
        tokio::spawn(async move { ctx.flows().start_sign_in("oidc.okta").await })
    };
    backend.handshake_started.notified().await;
    assert_eq!(backend.handshake_calls(), 1);

    // The interruption left the backend holding a continuation; the second
    // start must route through it rather than build a fresh request.
    backend.script_pending(Ok(Some(Principal::new("resumed"))));
    let second = ctx.flows().start_sign_in("oidc.okta").await;

    match second {
        SignInOutcome::Success { principal } => assert_eq!(principal.id, "resumed"),
        SignInOutcome::Failure { kind, message, .. } => {
            panic!("expected resumed success, got {kind:?}: {message}")
        }
    }
    assert_eq!(backend.handshake_calls(), 1);

    gate.notify_one();
    let first = first.await.unwrap();
    assert!(first.is_success());
}

#[tokio::test]
async fn token_exchange_with_empty_principal_is_null_principal_failure() {
    let backend = Arc::new(StubBackend::new());
    backend.script_exchange(Ok(None));

    let ctx = context_with(backend, "oidc.provider.id=oidc.okta\n").await;
    let outcome = ctx
        .flows()
        .sign_in_with_token("oidc.okta", "jwt-from-elsewhere", None)
        .await;

    match outcome {
        SignInOutcome::Failure { kind, .. } => {
            assert_eq!(kind, SignInFailureKind::NullPrincipal)
        }
        SignInOutcome::Success { .. } => panic!("empty principal must never be success"),
    }
}

#[tokio::test]
async fn reauthenticate_without_session_never_reaches_backend() {
    let backend = Arc::new(StubBackend::new());
    let ctx = context_with(backend.clone(), "oidc.provider.id=oidc.okta\n").await;

    let outcome = ctx.flows().reauthenticate("oidc.okta").await;
    match outcome {
        SignInOutcome::Failure { kind, .. } => {
            assert_eq!(kind, SignInFailureKind::NoActiveSession)
        }
        SignInOutcome::Success { .. } => panic!("expected failure"),
    }
    assert_eq!(backend.dispatch_calls(), 0);
}

#[tokio::test]
async fn link_provider_requires_session_too() {
    let backend = Arc::new(StubBackend::new());
    let ctx = context_with(backend.clone(), "oidc.provider.id=oidc.okta\n").await;

    let outcome = ctx.flows().link_provider("saml.adfs").await;
    match outcome {
        SignInOutcome::Failure { kind, .. } => {
            assert_eq!(kind, SignInFailureKind::NoActiveSession)
        }
        SignInOutcome::Success { .. } => panic!("expected failure"),
    }
    assert_eq!(backend.dispatch_calls(), 0);
}

#[tokio::test]
async fn native_credential_flow_exchanges_token() {
    let backend = Arc::new(StubBackend::new());
    backend.script_exchange(Ok(Some(Principal::new("u7"))));

    let ctx = context_with(backend.clone(), "oidc.provider.id=oidc.okta\n").await;
    let source = StubCredentialSource::new(Ok(NativeCredential {
        provider_ref: "google.com".to_string(),
        id_token: "native-jwt".to_string(),
        access_token: None,
    }));

    let outcome = ctx
        .flows()
        .sign_in_with_native_credential(&source, "client-abc")
        .await;
    assert!(outcome.is_success());
    assert_eq!(backend.exchange_calls(), 1);
}

#[tokio::test]
async fn unconfigured_override_outside_dev_mode_fails_without_dispatch() {
    let backend = Arc::new(StubBackend::new());
    let ctx = context_with(backend.clone(), "oidc.provider.id=oidc.okta\n").await;

    let outcome = ctx.flows().start_sign_in("oidc.rogue").await;
    match outcome {
        SignInOutcome::Failure {
            kind, provider_ref, ..
        } => {
            assert_eq!(kind, SignInFailureKind::ProviderNotConfigured);
            assert_eq!(provider_ref.as_deref(), Some("oidc.rogue"));
        }
        SignInOutcome::Success { .. } => panic!("expected failure"),
    }
    // No handshake goes out under a provider the caller never asked for.
    assert_eq!(backend.handshake_calls(), 0);
    assert!(backend.last_request().is_none());
}

#[tokio::test]
async fn dev_mode_permits_call_time_override() {
    let backend = Arc::new(StubBackend::new());
    backend.script_handshake(Ok(Some(Principal::new("u3"))));

    let ctx = context_with(
        backend.clone(),
        "oidc.provider.id=oidc.okta\noidc.development.mode=true\n",
    )
    .await;

    let outcome = ctx.flows().start_sign_in("oidc.rogue").await;
    assert!(outcome.is_success());
    assert_eq!(backend.last_request().unwrap().provider_ref, "oidc.rogue");
}

#[tokio::test]
async fn provider_rejection_classifies_as_provider_not_configured() {
    let backend = Arc::new(StubBackend::new());
    backend.script_handshake(Err(BackendError::Code {
        code: "operation-not-allowed".to_string(),
        message: "SAML provider is not enabled".to_string(),
    }));

    let ctx = context_with(backend, "saml.provider.id=saml.adfs\n").await;
    let outcome = ctx.flows().start_sign_in("saml.adfs").await;

    match outcome {
        SignInOutcome::Failure {
            kind, provider_ref, ..
        } => {
            assert_eq!(kind, SignInFailureKind::ProviderNotConfigured);
            assert_eq!(provider_ref.as_deref(), Some("saml.adfs"));
        }
        SignInOutcome::Success { .. } => panic!("expected failure"),
    }
}

#[tokio::test]
async fn cancelled_external_flow_surfaces_as_user_cancelled() {
    let backend = Arc::new(StubBackend::new());
    backend.script_handshake(Err(BackendError::Cancelled(
        "redirect window closed".to_string(),
    )));

    let ctx = context_with(backend, "oidc.provider.id=oidc.okta\n").await;
    let outcome = ctx.flows().start_sign_in("oidc.okta").await;

    match outcome {
        SignInOutcome::Failure { kind, .. } => {
            assert_eq!(kind, SignInFailureKind::UserCancelled)
        }
        SignInOutcome::Success { .. } => panic!("expected failure"),
    }
}
