//! Submission state machine shared by the four account screens.
//!
//! A screen owns one [`AuthFlow`] holding its draft, touched fields and
//! [`SubmissionState`]. [`submit`] runs one attempt: validate, mark the flow
//! `Submitting`, call the backend, settle, then report through the notifier.
//! While a flow is `Submitting`, further submits are dropped without a remote
//! call; that is the only concurrency guard.
//!
//! Flow Overview: Idle/Succeeded/Failed -> Submitting on a valid submit,
//! Submitting -> Succeeded or Failed when the remote call settles.

use crate::{
    app_lib::AppError,
    features::{
        auth::{
            backend::AuthBackend,
            session::ResetSession,
            types::UserSession,
            validation::{
                CredentialDraft, FORGOT_PASSWORD_SCHEMA, Field, FormSchema, RESET_PASSWORD_SCHEMA,
                SIGN_IN_SCHEMA, SIGN_UP_SCHEMA, ValidationErrors,
            },
        },
        notifications::{NotificationKind, Notify},
    },
};
use log::{debug, warn};
use secrecy::SecretString;
use std::cell::RefCell;
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    SignUp,
    SignIn,
    ForgotPassword,
    ResetPassword,
}

impl Screen {
    pub fn schema(self) -> &'static FormSchema {
        match self {
            Screen::SignUp => &SIGN_UP_SCHEMA,
            Screen::SignIn => &SIGN_IN_SCHEMA,
            Screen::ForgotPassword => &FORGOT_PASSWORD_SCHEMA,
            Screen::ResetPassword => &RESET_PASSWORD_SCHEMA,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Screen::SignUp => "Check your email for verification",
            Screen::SignIn => "Signed in successfully",
            Screen::ForgotPassword => "Password reset link sent to your email!",
            Screen::ResetPassword => "Password updated successfully!",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// A validated request, ready for the backend. The sign-up name stays in the
/// draft and is not part of the call.
#[derive(Debug)]
pub enum RemoteCall {
    CreateAccount {
        email: String,
        password: SecretString,
    },
    Authenticate {
        email: String,
        password: SecretString,
    },
    RequestPasswordReset {
        email: String,
        redirect_to: String,
    },
    UpdatePassword {
        session: Option<ResetSession>,
        new_password: SecretString,
    },
}

impl RemoteCall {
    fn screen(&self) -> Screen {
        match self {
            RemoteCall::CreateAccount { .. } => Screen::SignUp,
            RemoteCall::Authenticate { .. } => Screen::SignIn,
            RemoteCall::RequestPasswordReset { .. } => Screen::ForgotPassword,
            RemoteCall::UpdatePassword { .. } => Screen::ResetPassword,
        }
    }

    async fn dispatch<B: AuthBackend>(self, backend: &B) -> Result<RemoteReply, AppError> {
        match self {
            RemoteCall::CreateAccount { email, password } => backend
                .create_account(&email, &password)
                .await
                .map(|()| RemoteReply::Completed),
            RemoteCall::Authenticate { email, password } => backend
                .authenticate(&email, &password)
                .await
                .map(RemoteReply::SignedIn),
            RemoteCall::RequestPasswordReset { email, redirect_to } => backend
                .request_password_reset(&email, &redirect_to)
                .await
                .map(|()| RemoteReply::Completed),
            RemoteCall::UpdatePassword {
                session,
                new_password,
            } => backend
                .update_password(session.as_ref(), &new_password)
                .await
                .map(|()| RemoteReply::Completed),
        }
    }
}

#[derive(Debug)]
pub enum SubmitDecision {
    Dispatch(RemoteCall),
    Invalid(ValidationErrors),
    InFlight,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoteReply {
    Completed,
    SignedIn(UserSession),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission from the same screen is still in flight.
    Dropped,
    Invalid(ValidationErrors),
    Succeeded(RemoteReply),
    Failed(AppError),
    /// The screen was unmounted before the attempt started.
    Detached,
}

#[derive(Debug)]
pub struct AuthFlow {
    screen: Screen,
    draft: CredentialDraft,
    touched: BTreeSet<Field>,
    state: SubmissionState,
    reset_redirect: String,
    reset_session: Option<ResetSession>,
}

impl AuthFlow {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            draft: CredentialDraft::default(),
            touched: BTreeSet::new(),
            state: SubmissionState::Idle,
            reset_redirect: String::new(),
            reset_session: None,
        }
    }

    /// Where the emailed reset link should land (forgot-password only).
    pub fn with_reset_redirect(mut self, redirect_to: impl Into<String>) -> Self {
        self.reset_redirect = redirect_to.into();
        self
    }

    /// Recovery session from the reset link (reset-password only).
    pub fn with_reset_session(mut self, session: Option<ResetSession>) -> Self {
        self.reset_session = session;
        self
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn draft(&self) -> &CredentialDraft {
        &self.draft
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
    }

    /// Marks a field as visited so its error becomes visible.
    pub fn touch(&mut self, field: Field) {
        if self.screen.schema().field_names().any(|name| name == field) {
            self.touched.insert(field);
        }
    }

    pub fn errors(&self) -> ValidationErrors {
        self.screen.schema().validate(&self.draft)
    }

    /// Error to render next to `field`; hidden until the field is touched.
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if !self.touched.contains(&field) {
            return None;
        }
        self.screen.schema().validate_field(field, &self.draft)
    }

    /// Applies the validation gate and the single-flight guard. Only a
    /// `Dispatch` decision moves the flow to `Submitting`.
    pub fn begin_submit(&mut self) -> SubmitDecision {
        if self.is_submitting() {
            return SubmitDecision::InFlight;
        }

        let schema = self.screen.schema();
        self.touched.extend(schema.field_names());
        let errors = self.errors();
        if !errors.is_empty() {
            return SubmitDecision::Invalid(errors);
        }

        let call = self.remote_call();
        self.state = SubmissionState::Submitting;
        SubmitDecision::Dispatch(call)
    }

    fn remote_call(&self) -> RemoteCall {
        let email = self.draft.email.clone();
        let password = SecretString::from(self.draft.password.clone());
        match self.screen {
            Screen::SignUp => RemoteCall::CreateAccount { email, password },
            Screen::SignIn => RemoteCall::Authenticate { email, password },
            Screen::ForgotPassword => RemoteCall::RequestPasswordReset {
                email,
                redirect_to: self.reset_redirect.clone(),
            },
            Screen::ResetPassword => RemoteCall::UpdatePassword {
                session: self.reset_session.clone(),
                new_password: password,
            },
        }
    }

    /// Records the remote result. A successful sign-up resets the form.
    pub fn settle(&mut self, succeeded: bool) {
        if !self.is_submitting() {
            return;
        }
        if succeeded {
            self.state = SubmissionState::Succeeded;
            if self.screen == Screen::SignUp {
                self.draft.clear();
                self.touched.clear();
            }
        } else {
            self.state = SubmissionState::Failed;
        }
    }
}

/// Storage for a screen's flow. Implemented for `RefCell` and for the UI's
/// reactive signal, which stops answering once the screen unmounts.
pub trait FlowCell {
    fn with_flow<R>(&self, f: impl FnOnce(&mut AuthFlow) -> R) -> Option<R>;
}

impl FlowCell for RefCell<AuthFlow> {
    fn with_flow<R>(&self, f: impl FnOnce(&mut AuthFlow) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Notification for a settled attempt: the screen's fixed success text, or the
/// backend's message verbatim.
fn feedback(screen: Screen, result: &Result<RemoteReply, AppError>) -> (NotificationKind, String) {
    match result {
        Ok(_) => (
            NotificationKind::Success,
            screen.success_message().to_string(),
        ),
        Err(err) => (NotificationKind::Error, err.user_message()),
    }
}

/// Runs one submit attempt for the flow in `cell`.
pub async fn submit<C, B, N>(cell: &C, backend: &B, notifier: &N) -> SubmitOutcome
where
    C: FlowCell,
    B: AuthBackend,
    N: Notify,
{
    let Some(decision) = cell.with_flow(AuthFlow::begin_submit) else {
        return SubmitOutcome::Detached;
    };

    let call = match decision {
        SubmitDecision::Dispatch(call) => call,
        SubmitDecision::Invalid(errors) => {
            debug!("submit blocked by {} invalid field(s)", errors.len());
            return SubmitOutcome::Invalid(errors);
        }
        SubmitDecision::InFlight => {
            debug!("submit dropped: a request is already in flight");
            return SubmitOutcome::Dropped;
        }
    };

    let screen = call.screen();
    debug!("{screen:?}: submitting");
    let result = call.dispatch(backend).await;

    if cell.with_flow(|flow| flow.settle(result.is_ok())).is_none() {
        debug!("{screen:?}: screen closed before the request settled");
    }
    match &result {
        Ok(_) => debug!("{screen:?}: succeeded"),
        Err(err) => warn!("{screen:?}: failed: {err}"),
    }

    let (kind, message) = feedback(screen, &result);
    notifier.notify(kind, message);

    match result {
        Ok(reply) => SubmitOutcome::Succeeded(reply),
        Err(err) => SubmitOutcome::Failed(err),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AuthFlow, FlowCell, RemoteReply, Screen, SubmissionState, SubmitOutcome, submit,
    };
    use crate::{
        app_lib::AppError,
        features::{
            auth::{
                backend::AuthBackend, session::ResetSession, types::UserSession,
                validation::Field,
            },
            notifications::{NotificationKind, NotificationQueue},
        },
    };
    use secrecy::{ExposeSecret, SecretString};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use tokio::sync::Notify as Release;

    const REDIRECT: &str = "http://localhost:3000/reset-password";

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum Call {
        CreateAccount { email: String, password: String },
        Authenticate { email: String, password: String },
        RequestPasswordReset { email: String, redirect_to: String },
        UpdatePassword { token: Option<String>, password: String },
    }

    #[derive(Default)]
    struct FakeBackend {
        calls: RefCell<Vec<Call>>,
        failures: RefCell<VecDeque<Option<AppError>>>,
        release: Option<Rc<Release>>,
    }

    impl FakeBackend {
        fn failing_with(messages: &[Option<&str>]) -> Self {
            let failures = messages
                .iter()
                .map(|message| {
                    message.map(|text| {
                        AppError::from_response(400, &format!(r#"{{"msg":"{text}"}}"#))
                    })
                })
                .collect();
            Self {
                failures: RefCell::new(failures),
                ..Self::default()
            }
        }

        fn held_until(release: Rc<Release>) -> Self {
            Self {
                release: Some(release),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        async fn record(&self, call: Call) -> Result<(), AppError> {
            self.calls.borrow_mut().push(call);
            if let Some(release) = &self.release {
                release.notified().await;
            }
            match self.failures.borrow_mut().pop_front().flatten() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }
    }

    impl AuthBackend for FakeBackend {
        async fn create_account(
            &self,
            email: &str,
            password: &SecretString,
        ) -> Result<(), AppError> {
            self.record(Call::CreateAccount {
                email: email.to_string(),
                password: password.expose_secret().to_string(),
            })
            .await
        }

        async fn authenticate(
            &self,
            email: &str,
            password: &SecretString,
        ) -> Result<UserSession, AppError> {
            self.record(Call::Authenticate {
                email: email.to_string(),
                password: password.expose_secret().to_string(),
            })
            .await?;
            Ok(UserSession {
                user_id: "u-1".to_string(),
                email: email.to_string(),
            })
        }

        async fn request_password_reset(
            &self,
            email: &str,
            redirect_to: &str,
        ) -> Result<(), AppError> {
            self.record(Call::RequestPasswordReset {
                email: email.to_string(),
                redirect_to: redirect_to.to_string(),
            })
            .await
        }

        async fn update_password(
            &self,
            session: Option<&ResetSession>,
            new_password: &SecretString,
        ) -> Result<(), AppError> {
            self.record(Call::UpdatePassword {
                token: session.map(|session| session.access_token().expose_secret().to_string()),
                password: new_password.expose_secret().to_string(),
            })
            .await
        }
    }

    /// A cell whose screen has already been unmounted.
    struct Unmounted;

    impl FlowCell for Unmounted {
        fn with_flow<R>(&self, _f: impl FnOnce(&mut AuthFlow) -> R) -> Option<R> {
            None
        }
    }

    fn flow_with(screen: Screen, fields: &[(Field, &str)]) -> RefCell<AuthFlow> {
        let mut flow = AuthFlow::new(screen).with_reset_redirect(REDIRECT);
        for (field, value) in fields {
            flow.set_field(*field, (*value).to_string());
        }
        RefCell::new(flow)
    }

    fn valid_sign_up() -> RefCell<AuthFlow> {
        flow_with(
            Screen::SignUp,
            &[
                (Field::Name, "Asha Rao"),
                (Field::Email, "asha@example.com"),
                (Field::Password, "hunter22"),
                (Field::ConfirmPassword, "hunter22"),
            ],
        )
    }

    fn valid_sign_in() -> RefCell<AuthFlow> {
        flow_with(
            Screen::SignIn,
            &[(Field::Email, "asha@example.com"), (Field::Password, "hunter22")],
        )
    }

    fn state(cell: &RefCell<AuthFlow>) -> SubmissionState {
        cell.borrow().state
    }

    fn notes(queue: &RefCell<NotificationQueue>) -> Vec<(NotificationKind, String)> {
        queue
            .borrow()
            .items()
            .iter()
            .map(|item| (item.kind, item.message.clone()))
            .collect()
    }

    #[tokio::test]
    async fn invalid_email_never_reaches_the_backend() {
        let backend = FakeBackend::default();
        let notifier = RefCell::new(NotificationQueue::new());
        for screen in [Screen::SignUp, Screen::SignIn, Screen::ForgotPassword] {
            let cell = flow_with(
                screen,
                &[
                    (Field::Name, "Asha Rao"),
                    (Field::Email, "not-an-email"),
                    (Field::Password, "hunter22"),
                    (Field::ConfirmPassword, "hunter22"),
                ],
            );

            let outcome = submit(&cell, &backend, &notifier).await;

            let SubmitOutcome::Invalid(errors) = outcome else {
                panic!("{screen:?}: expected invalid outcome, got {outcome:?}");
            };
            assert!(errors.get(Field::Email).is_some());
            assert_eq!(state(&cell), SubmissionState::Idle);
        }
        assert!(backend.calls().is_empty());
        assert!(notifier.borrow().items().is_empty());
    }

    #[tokio::test]
    async fn short_password_blocks_sign_up_and_reset() {
        let backend = FakeBackend::default();
        let notifier = RefCell::new(NotificationQueue::new());

        let sign_up = flow_with(
            Screen::SignUp,
            &[
                (Field::Name, "Asha Rao"),
                (Field::Email, "asha@example.com"),
                (Field::Password, "abc12"),
                (Field::ConfirmPassword, "abc12"),
            ],
        );
        let reset = flow_with(
            Screen::ResetPassword,
            &[(Field::Password, "abc12"), (Field::ConfirmPassword, "abc12")],
        );

        for cell in [&sign_up, &reset] {
            let outcome = submit(cell, &backend, &notifier).await;
            let SubmitOutcome::Invalid(errors) = outcome else {
                panic!("expected invalid outcome, got {outcome:?}");
            };
            assert_eq!(errors.len(), 1);
            assert!(errors.get(Field::Password).is_some());
            assert!(cell.borrow().visible_error(Field::Password).is_some());
        }
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_dropped() {
        let release = Rc::new(Release::new());
        let backend = FakeBackend::held_until(Rc::clone(&release));
        let notifier = RefCell::new(NotificationQueue::new());
        let cell = valid_sign_in();

        let (first, second, ()) = tokio::join!(
            submit(&cell, &backend, &notifier),
            async {
                assert_eq!(state(&cell), SubmissionState::Submitting);
                submit(&cell, &backend, &notifier).await
            },
            async { release.notify_one() },
        );

        assert!(matches!(first, SubmitOutcome::Succeeded(RemoteReply::SignedIn(_))));
        assert_eq!(second, SubmitOutcome::Dropped);
        assert_eq!(backend.calls().len(), 1);
        assert_eq!(notes(&notifier).len(), 1);
        assert_eq!(state(&cell), SubmissionState::Succeeded);
    }

    #[tokio::test]
    async fn successful_sign_up_clears_the_draft() {
        let backend = FakeBackend::default();
        let notifier = RefCell::new(NotificationQueue::new());
        let cell = valid_sign_up();

        let outcome = submit(&cell, &backend, &notifier).await;

        assert_eq!(outcome, SubmitOutcome::Succeeded(RemoteReply::Completed));
        assert_eq!(state(&cell), SubmissionState::Succeeded);
        let flow = cell.borrow();
        assert_eq!(flow.draft().value(Field::Name), "");
        assert_eq!(flow.draft().value(Field::Email), "");
        assert_eq!(flow.draft().value(Field::Password), "");
        assert_eq!(flow.draft().value(Field::ConfirmPassword), "");
        assert_eq!(flow.visible_error(Field::Email), None);
        assert_eq!(
            notes(&notifier),
            vec![(
                NotificationKind::Success,
                "Check your email for verification".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn sign_up_sends_credentials_but_not_the_name() {
        let backend = FakeBackend::default();
        let notifier = RefCell::new(NotificationQueue::new());

        submit(&valid_sign_up(), &backend, &notifier).await;

        assert_eq!(
            backend.calls(),
            vec![Call::CreateAccount {
                email: "asha@example.com".to_string(),
                password: "hunter22".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn failed_sign_up_keeps_the_draft_for_retry() {
        let backend = FakeBackend::failing_with(&[Some("User already registered")]);
        let notifier = RefCell::new(NotificationQueue::new());
        let cell = valid_sign_up();

        let outcome = submit(&cell, &backend, &notifier).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(state(&cell), SubmissionState::Failed);
        assert_eq!(cell.borrow().draft().value(Field::Email), "asha@example.com");
    }

    #[tokio::test]
    async fn rejected_sign_in_reports_the_backend_message_once() {
        let backend = FakeBackend::failing_with(&[Some("Invalid login credentials")]);
        let notifier = RefCell::new(NotificationQueue::new());
        let cell = valid_sign_in();

        let outcome = submit(&cell, &backend, &notifier).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(AppError::Http { status: 400, .. })));
        assert_eq!(
            notes(&notifier),
            vec![(
                NotificationKind::Error,
                "Invalid login credentials".to_string()
            )]
        );
        assert_eq!(state(&cell), SubmissionState::Failed);
        assert!(!cell.borrow().is_submitting());
    }

    #[tokio::test]
    async fn sign_in_password_is_bound_to_the_draft() {
        let backend = FakeBackend::default();
        let notifier = RefCell::new(NotificationQueue::new());
        let cell = flow_with(Screen::SignIn, &[(Field::Email, "asha@example.com")]);

        let blocked = submit(&cell, &backend, &notifier).await;
        let SubmitOutcome::Invalid(errors) = blocked else {
            panic!("expected invalid outcome, got {blocked:?}");
        };
        assert_eq!(errors.get(Field::Password), Some("Password is required"));

        cell.borrow_mut().set_field(Field::Password, "hunter22".to_string());
        let outcome = submit(&cell, &backend, &notifier).await;

        assert!(matches!(outcome, SubmitOutcome::Succeeded(RemoteReply::SignedIn(_))));
        assert_eq!(
            backend.calls(),
            vec![Call::Authenticate {
                email: "asha@example.com".to_string(),
                password: "hunter22".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn failure_re_enables_submission() {
        let backend = FakeBackend::failing_with(&[Some("Invalid login credentials"), None]);
        let notifier = RefCell::new(NotificationQueue::new());
        let cell = valid_sign_in();

        submit(&cell, &backend, &notifier).await;
        let retry = submit(&cell, &backend, &notifier).await;

        assert_eq!(
            retry,
            SubmitOutcome::Succeeded(RemoteReply::SignedIn(UserSession {
                user_id: "u-1".to_string(),
                email: "asha@example.com".to_string(),
            }))
        );
        assert_eq!(backend.calls().len(), 2);
        assert_eq!(
            notes(&notifier),
            vec![
                (NotificationKind::Error, "Invalid login credentials".to_string()),
                (NotificationKind::Success, "Signed in successfully".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn forgot_password_always_uses_the_fixed_redirect() {
        let backend =
            FakeBackend::failing_with(&[Some("Email rate limit exceeded"), Some("boom"), None]);
        let notifier = RefCell::new(NotificationQueue::new());
        let cell = flow_with(Screen::ForgotPassword, &[(Field::Email, "asha@example.com")]);

        for _ in 0..3 {
            submit(&cell, &backend, &notifier).await;
        }

        let expected = Call::RequestPasswordReset {
            email: "asha@example.com".to_string(),
            redirect_to: REDIRECT.to_string(),
        };
        assert_eq!(backend.calls(), vec![expected.clone(), expected.clone(), expected]);
        assert_eq!(state(&cell), SubmissionState::Succeeded);
        assert_eq!(
            notes(&notifier).last(),
            Some(&(
                NotificationKind::Success,
                "Password reset link sent to your email!".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn reset_password_threads_the_recovery_session() {
        let backend = FakeBackend::default();
        let notifier = RefCell::new(NotificationQueue::new());
        let flow = AuthFlow::new(Screen::ResetPassword)
            .with_reset_session(Some(ResetSession::new("recovery-jwt", Some("r3f"))));
        let cell = RefCell::new(flow);
        cell.borrow_mut().set_field(Field::Password, "n3w-pass".to_string());
        cell.borrow_mut()
            .set_field(Field::ConfirmPassword, "n3w-pass".to_string());

        let outcome = submit(&cell, &backend, &notifier).await;

        assert_eq!(outcome, SubmitOutcome::Succeeded(RemoteReply::Completed));
        assert_eq!(
            backend.calls(),
            vec![Call::UpdatePassword {
                token: Some("recovery-jwt".to_string()),
                password: "n3w-pass".to_string(),
            }]
        );
        assert_eq!(
            notes(&notifier),
            vec![(
                NotificationKind::Success,
                "Password updated successfully!".to_string()
            )]
        );
        // Only sign-up resets the form.
        assert_eq!(cell.borrow().draft().value(Field::Password), "n3w-pass");
    }

    #[tokio::test]
    async fn reset_password_without_session_defers_to_backend() {
        let backend = FakeBackend::failing_with(&[Some("Auth session missing!")]);
        let notifier = RefCell::new(NotificationQueue::new());
        let cell = flow_with(
            Screen::ResetPassword,
            &[(Field::Password, "n3w-pass"), (Field::ConfirmPassword, "n3w-pass")],
        );

        submit(&cell, &backend, &notifier).await;

        assert_eq!(
            backend.calls(),
            vec![Call::UpdatePassword {
                token: None,
                password: "n3w-pass".to_string(),
            }]
        );
        assert_eq!(
            notes(&notifier),
            vec![(NotificationKind::Error, "Auth session missing!".to_string())]
        );
    }

    #[tokio::test]
    async fn unmounted_screen_does_nothing() {
        let backend = FakeBackend::default();
        let notifier = RefCell::new(NotificationQueue::new());

        let outcome = submit(&Unmounted, &backend, &notifier).await;

        assert_eq!(outcome, SubmitOutcome::Detached);
        assert!(backend.calls().is_empty());
        assert!(notifier.borrow().items().is_empty());
    }

    #[test]
    fn errors_stay_hidden_until_touched() {
        let mut flow = AuthFlow::new(Screen::SignIn);
        flow.set_field(Field::Email, "asha@".to_string());
        assert_eq!(flow.visible_error(Field::Email), None);

        flow.touch(Field::Email);
        assert_eq!(flow.visible_error(Field::Email), Some("Invalid email"));
        assert_eq!(flow.visible_error(Field::Password), None);

        // Fields outside the form cannot be touched.
        flow.touch(Field::Name);
        assert_eq!(flow.visible_error(Field::Name), None);
    }

    #[test]
    fn blocked_submit_reveals_every_error() {
        let cell = RefCell::new(AuthFlow::new(Screen::SignUp));
        let decision = cell.with_flow(AuthFlow::begin_submit);
        assert!(matches!(decision, Some(super::SubmitDecision::Invalid(_))));

        let flow = cell.borrow();
        assert_eq!(flow.visible_error(Field::Name), Some("Name is required"));
        assert_eq!(
            flow.visible_error(Field::ConfirmPassword),
            Some("Confirm password is required")
        );
        assert_eq!(flow.state, SubmissionState::Idle);
    }

    #[test]
    fn settle_is_ignored_unless_submitting() {
        let mut flow = AuthFlow::new(Screen::ForgotPassword);
        flow.settle(true);
        assert_eq!(flow.state, SubmissionState::Idle);
    }
}
