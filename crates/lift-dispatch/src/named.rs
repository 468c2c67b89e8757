//! Built-in policies selected by configuration.

use lift_core::PolicyKind;

use crate::{DispatchContext, DispatchPolicy, FirstInLine, IdlePolicy, NearestCar};

/// One of the built-in policies, chosen by [`PolicyKind`].
///
/// Lets a driver pick a policy from `BuildingConfig::policy` while the
/// building itself stays statically typed over `P: DispatchPolicy`.
pub enum NamedPolicy {
    FirstInLine(FirstInLine),
    NearestCar(NearestCar),
    Idle(IdlePolicy),
}

impl NamedPolicy {
    pub fn kind(&self) -> PolicyKind {
        match self {
            NamedPolicy::FirstInLine(_) => PolicyKind::FirstInLine,
            NamedPolicy::NearestCar(_)  => PolicyKind::NearestCar,
            NamedPolicy::Idle(_)        => PolicyKind::Idle,
        }
    }
}

impl From<PolicyKind> for NamedPolicy {
    fn from(kind: PolicyKind) -> Self {
        match kind {
            PolicyKind::FirstInLine => NamedPolicy::FirstInLine(FirstInLine),
            PolicyKind::NearestCar  => NamedPolicy::NearestCar(NearestCar),
            PolicyKind::Idle        => NamedPolicy::Idle(IdlePolicy),
        }
    }
}

impl DispatchPolicy for NamedPolicy {
    fn direct_elevators(&self, ctx: &mut DispatchContext<'_>) {
        match self {
            NamedPolicy::FirstInLine(p) => p.direct_elevators(ctx),
            NamedPolicy::NearestCar(p)  => p.direct_elevators(ctx),
            NamedPolicy::Idle(p)        => p.direct_elevators(ctx),
        }
    }

    fn name(&self) -> &'static str {
        self.kind().name()
    }
}
