//! Application driver: runs the effects that `update` flags.
//!
//! Everything executes on one task of a current-thread runtime; the only
//! suspension points are the network requests. Failures are logged at the
//! top level and otherwise ignored: no retries, no user-facing feedback.

use anyhow::Result;
use futures_util::future::{self, Either};
use std::pin::pin;
use tracing::{debug, warn};

use crate::api::{Comment, PortfolioApi};
use crate::message::Message;
use crate::model::Model;
use crate::update::update;

pub struct App<A> {
    pub model: Model,
    api: A,
}

impl<A: PortfolioApi> App<A> {
    pub const fn new(model: Model, api: A) -> Self {
        Self { model, api }
    }

    /// Apply a message, then carry out whatever effects it flagged.
    pub async fn dispatch(&mut self, msg: Message) {
        update(&mut self.model, msg);
        if self.model.needs_login_control {
            fetch_login_control(&mut self.model, &self.api).await;
        }
        if let Some(fields) = self.model.pending_submission.take() {
            self.submit_comment(fields).await;
        }
    }

    /// Fire the login-status check and the comment fetch concurrently and
    /// apply each response as it arrives; the two are deliberately unordered
    /// with respect to each other.
    pub async fn load_comments(&mut self) {
        debug!("loading comments and login status");
        let Self { model, api } = self;
        let login = pin!(api.login_status());
        let comments = pin!(api.fetch_comments());

        match future::select(login, comments).await {
            Either::Left((login_result, comments_pending)) => {
                apply_login(model, api, login_result).await;
                apply_comments(model, comments_pending.await);
            }
            Either::Right((comments_result, login_pending)) => {
                apply_comments(model, comments_result);
                apply_login(model, api, login_pending.await).await;
            }
        }
    }

    /// Greeting-page variant: fetch `/data` and render the strings.
    pub async fn load_greetings(&mut self) {
        match self.api.fetch_greetings().await {
            Ok(greetings) => update(&mut self.model, Message::GreetingsLoaded(greetings)),
            Err(err) => warn!("greeting fetch failed: {err:#}"),
        }
    }

    /// POST the already-serialized fields; on success only, reload the list.
    /// The form was cleared when the fields were captured, so a failure
    /// leaves it cleared with no comment added.
    async fn submit_comment(&mut self, fields: Vec<(String, String)>) {
        match self.api.post_comment(&fields).await {
            Ok(()) => self.load_comments().await,
            Err(err) => warn!("comment post failed: {err:#}"),
        }
    }
}

fn apply_comments(model: &mut Model, result: Result<Vec<Comment>>) {
    match result {
        Ok(comments) => update(model, Message::CommentsLoaded(comments)),
        Err(err) => warn!("comment fetch failed: {err:#}"),
    }
}

async fn apply_login<A: PortfolioApi>(model: &mut Model, api: &A, result: Result<u16>) {
    match result {
        Ok(code) => {
            update(model, Message::LoginStatus(code));
            if model.needs_login_control {
                fetch_login_control(model, api).await;
            }
        }
        Err(err) => warn!("login-status check failed: {err:#}"),
    }
}

async fn fetch_login_control<A: PortfolioApi>(model: &mut Model, api: &A) {
    model.needs_login_control = false;
    match api.login_control().await {
        Ok(markup) => update(model, Message::LoginControlLoaded(markup)),
        Err(err) => warn!("login control fetch failed: {err:#}"),
    }
}
