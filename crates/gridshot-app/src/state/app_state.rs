use crate::{
    service::SessionHandle,
    state::{Settings, WorkflowState},
};

// AppState holds the workflow plus settings. The session inside it is
// serialized for resume; mutation goes through access() so the dirty flag
// tracks when a save is due.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) workflow: WorkflowState,
    pub(crate) settings: Settings,
    dirty: bool,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(settings: Settings) -> Self {
        Self {
            workflow: WorkflowState::new(),
            settings,
            dirty: false,
        }
    }

    #[must_use]
    pub(crate) fn resume(settings: Settings, session: SessionHandle) -> Self {
        Self {
            workflow: WorkflowState::resume_session(session),
            settings,
            dirty: false,
        }
    }

    pub(crate) fn access(&mut self) -> AppStateAccess<'_> {
        AppStateAccess { app_state: self }
    }

    #[must_use]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

#[derive(Debug)]
pub(crate) struct AppStateAccess<'a> {
    app_state: &'a mut AppState,
}

impl AppStateAccess<'_> {
    #[must_use]
    pub(crate) fn as_ref(&self) -> &AppState {
        self.app_state
    }

    pub(crate) fn as_mut(&mut self) -> &mut AppState {
        self.app_state.dirty = true;
        self.app_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutable_access_marks_dirty() {
        let mut state = AppState::new(Settings::default());
        assert!(!state.is_dirty());

        let access = state.access();
        let _ = access.as_ref();
        assert!(!state.is_dirty());

        let mut access = state.access();
        let _ = access.as_mut();
        assert!(state.is_dirty());

        state.clear_dirty();
        assert!(!state.is_dirty());
    }

    #[test]
    fn resume_carries_the_session() {
        let state = AppState::resume(Settings::default(), SessionHandle::new("s1"));
        assert_eq!(state.workflow.session(), Some(&SessionHandle::new("s1")));
    }
}
