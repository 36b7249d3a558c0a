//! Screen state containers
//!
//! Each screen of the client is a plain struct driven through `&mut self`
//! methods. Work that talks to the server is split into a `begin_*`/`finish_*`
//! pair so a reactive front end can hold the state in a signal across an
//! await, with an async convenience wrapper for callers that can borrow.

pub mod confirm;
pub mod detail;
pub mod forms;
pub mod list;

/// Client-side route paths
pub mod nav {
    pub const LIST: &str = "/";
    pub const NEW_TRYOUT: &str = "/tryout/new";

    pub fn tryout_detail(id: &str) -> String {
        format!("/tryout/{id}")
    }

    pub fn tryout_edit(id: &str) -> String {
        format!("/tryout/{id}/edit")
    }

    pub fn question_new(tryout_id: &str) -> String {
        format!("/tryout/{tryout_id}/question/new")
    }

    pub fn question_edit(tryout_id: &str, question_id: &str) -> String {
        format!("/tryout/{tryout_id}/question/{question_id}/edit")
    }

}
