//! Yew reducer wrappers over the pure slices in `odonto_core`.
//!
//! The newtypes exist so `Reducible` can be implemented here while the
//! transition logic stays in the core crate, where it is tested.

use std::rc::Rc;

use odonto_core::auth::{self, AuthAction, AuthState};
use odonto_core::consultation::{self, ConsultationAction, ConsultationState};
use odonto_core::datetime;
use odonto_core::tasks::{self, TasksAction, TasksState};
use yew::Reducible;

#[derive(Clone, Default, PartialEq)]
pub struct Auth(pub AuthState);

impl Reducible for Auth {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: AuthAction) -> Rc<Self> {
        Rc::new(Auth(auth::reduce(&self.0, action)))
    }
}

#[derive(Clone, Default, PartialEq)]
pub struct Tasks(pub TasksState);

impl Reducible for Tasks {
    type Action = TasksAction;

    fn reduce(self: Rc<Self>, action: TasksAction) -> Rc<Self> {
        Rc::new(Tasks(tasks::reduce(&self.0, action)))
    }
}

#[derive(Clone, PartialEq)]
pub struct Consultation(pub ConsultationState);

impl Consultation {
    pub fn seeded() -> Self {
        Consultation(ConsultationState::seeded(&datetime::today_ymd()))
    }
}

impl Reducible for Consultation {
    type Action = ConsultationAction;

    fn reduce(self: Rc<Self>, action: ConsultationAction) -> Rc<Self> {
        Rc::new(Consultation(consultation::reduce(&self.0, action)))
    }
}
