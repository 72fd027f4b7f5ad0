use crate::core::math::cap_length;
use crate::spatial::ParticleState;

use super::boundary::contain;
use super::collision::{resolve_against_lead, resolve_peers, ContactCounts};
use super::context::SimulationContext;
use super::forces::{drive_kinematic, integrate_dynamic};
use super::types::{FramePlan, Lead, Motion, Pass, PhysicsParams, StepReport};

/// Advances a [`ParticleState`] one frame at a time.
///
/// A frame runs these passes in order, each exactly once:
/// 1. plan: decide whether slot 0 is kinematic (the only dispatch point)
/// 2. integrate: ease the kinematic slot, apply forces to dynamic slots
/// 3. collide: one relaxation pass over pairs, then the cursor sphere
/// 4. contain: re-cap speeds, then clamp every dynamic slot to the walls
#[derive(Clone, Debug)]
pub struct PhysicsStepper {
    params: PhysicsParams,
}

impl PhysicsStepper {
    pub fn new(params: PhysicsParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &PhysicsParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut PhysicsParams {
        &mut self.params
    }

    /// Run a whole frame. `dt_seconds` only feeds gravity; anything
    /// non-finite or negative counts as a paused frame.
    pub fn advance(
        &self,
        state: &mut ParticleState,
        ctx: &SimulationContext,
        dt_seconds: f32,
    ) -> StepReport {
        self.advance_observed(state, ctx, dt_seconds, |_| {})
    }

    /// [`advance`](Self::advance), calling `after_pass` as each pass
    /// finishes (perf timing hooks in here).
    pub fn advance_observed<F>(
        &self,
        state: &mut ParticleState,
        ctx: &SimulationContext,
        dt_seconds: f32,
        mut after_pass: F,
    ) -> StepReport
    where
        F: FnMut(Pass),
    {
        let dt = sanitize_dt(dt_seconds);
        let plan = self.plan(state, ctx);
        let mut report = StepReport::default();

        self.integrate(state, &plan, dt);
        after_pass(Pass::Integrate);
        self.collide(state, &plan, &mut report);
        after_pass(Pass::Collide);
        self.contain(state, ctx, &plan, &mut report);
        after_pass(Pass::Contain);

        report
    }

    /// Dispatch on slot 0's motion for this frame.
    pub fn plan(&self, state: &ParticleState, ctx: &SimulationContext) -> FramePlan {
        let count = state.len();
        match ctx.attractor.motion() {
            Motion::Dynamic => FramePlan {
                dynamic: 0..count,
                lead: None,
            },
            Motion::Kinematic { target } => FramePlan {
                dynamic: 1..count,
                lead: Some(Lead { index: 0, target }),
            },
        }
    }

    pub fn integrate(&self, state: &mut ParticleState, plan: &FramePlan, dt: f32) {
        let p = &self.params;

        if let Some(lead) = plan.lead {
            drive_kinematic(
                &mut state.positions[lead.index],
                &mut state.velocities[lead.index],
                lead.target,
                p.attractor_smoothing,
            );
        }

        for i in plan.dynamic.clone() {
            integrate_dynamic(
                &mut state.positions[i],
                &mut state.velocities[i],
                state.radii[i],
                dt,
                p,
            );
        }
    }

    pub fn collide(&self, state: &mut ParticleState, plan: &FramePlan, report: &mut StepReport) {
        let p = &self.params;
        let mut counts = ContactCounts::default();

        resolve_peers(state, plan.dynamic.clone(), p.peer_kick_floor, &mut counts);
        if let Some(lead) = plan.lead {
            resolve_against_lead(
                state,
                lead.index,
                plan.dynamic.clone(),
                p.attractor_kick_floor,
                &mut counts,
            );
        }

        report.contacts += counts.peer;
        report.attractor_contacts += counts.attractor;
        report.degenerate_contacts += counts.degenerate;
    }

    pub fn contain(
        &self,
        state: &mut ParticleState,
        ctx: &SimulationContext,
        plan: &FramePlan,
        report: &mut StepReport,
    ) {
        let p = &self.params;

        for i in plan.dynamic.clone() {
            // Collision kicks can exceed the cap set during integration.
            let velocity = cap_length(state.velocities[i], p.max_velocity);
            let out = contain(state.positions[i], velocity, state.radii[i], &ctx.bounds, p);
            state.positions[i] = out.position;
            state.velocities[i] = out.velocity;
            report.wall_hits += out.hits;
        }

        report.max_speed = state.max_speed_in(plan.dynamic.clone());
    }
}

#[inline]
fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("ignoring invalid frame delta {}", dt);
        0.0
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::spatial::SimulationBounds;

    fn params() -> PhysicsParams {
        PhysicsParams {
            gravity: 0.0,
            friction: 1.0,
            wall_bounce: 1.0,
            max_velocity: 10.0,
            max_size: 1.0,
            peer_kick_floor: 1.0,
            attractor_kick_floor: 2.0,
            attractor_smoothing: 0.1,
        }
    }

    fn ctx() -> SimulationContext {
        SimulationContext::new(SimulationBounds::new(10.0, 10.0, 10.0))
    }

    #[test]
    fn plan_without_cursor_covers_every_slot() {
        let state = ParticleState::from_parts(vec![Vec3::ZERO; 3], vec![Vec3::ZERO; 3], vec![1.0; 3]);
        let plan = PhysicsStepper::new(params()).plan(&state, &ctx());
        assert_eq!(plan.dynamic, 0..3);
        assert!(plan.lead.is_none());
    }

    #[test]
    fn plan_with_cursor_makes_slot_zero_kinematic() {
        let state = ParticleState::from_parts(vec![Vec3::ZERO; 3], vec![Vec3::ZERO; 3], vec![1.0; 3]);
        let mut c = ctx();
        c.attractor.set_target(Vec3::new(2.0, 0.0, 0.0));
        let plan = PhysicsStepper::new(params()).plan(&state, &c);
        assert_eq!(plan.dynamic, 1..3);
        assert_eq!(
            plan.lead,
            Some(Lead {
                index: 0,
                target: Vec3::new(2.0, 0.0, 0.0)
            })
        );
    }

    #[test]
    fn kinematic_slot_ignores_gravity_and_collisions() {
        let mut p = params();
        p.gravity = 1.0;
        let stepper = PhysicsStepper::new(p);
        let mut state = ParticleState::from_parts(
            vec![Vec3::ZERO, Vec3::new(0.5, 0.0, 0.0)],
            vec![Vec3::new(1.0, 1.0, 1.0), Vec3::ZERO],
            vec![1.0, 1.0],
        );
        let mut c = ctx();
        c.attractor.set_target(Vec3::ZERO);

        let report = stepper.advance(&mut state, &c, 0.016);

        assert_eq!(state.position(0), Vec3::ZERO);
        assert_eq!(state.velocity(0), Vec3::ZERO);
        assert_eq!(report.attractor_contacts, 1);
        assert!(state.position(1).x > 0.5);
    }

    #[test]
    fn passes_are_reported_in_order() {
        let stepper = PhysicsStepper::new(params());
        let mut state = ParticleState::from_parts(
            vec![Vec3::ZERO, Vec3::new(0.5, 0.0, 0.0)],
            vec![Vec3::ZERO; 2],
            vec![1.0, 1.0],
        );
        let mut twin = ParticleState::from_parts(
            state.positions.clone(),
            state.velocities.clone(),
            state.radii.clone(),
        );

        let mut seen = Vec::new();
        let observed = stepper.advance_observed(&mut state, &ctx(), 0.016, |pass| seen.push(pass));
        let plain = stepper.advance(&mut twin, &ctx(), 0.016);

        assert_eq!(seen, vec![Pass::Integrate, Pass::Collide, Pass::Contain]);
        assert_eq!(observed, plain);
        assert_eq!(state.positions, twin.positions);
    }

    #[test]
    fn pair_checks_count_lead_contacts() {
        let state = ParticleState::from_parts(vec![Vec3::ZERO; 5], vec![Vec3::ZERO; 5], vec![1.0; 5]);
        let stepper = PhysicsStepper::new(params());
        let mut c = ctx();
        assert_eq!(stepper.plan(&state, &c).pair_checks(), 10);
        c.attractor.set_target(Vec3::ZERO);
        assert_eq!(stepper.plan(&state, &c).pair_checks(), 6 + 4);
    }

    #[test]
    fn invalid_dt_freezes_gravity() {
        let mut p = params();
        p.gravity = 1.0;
        let stepper = PhysicsStepper::new(p);
        let mut state = ParticleState::from_parts(vec![Vec3::ZERO], vec![Vec3::ZERO], vec![1.0]);
        stepper.advance(&mut state, &ctx(), f32::NAN);
        stepper.advance(&mut state, &ctx(), -1.0);
        assert_eq!(state.velocity(0), Vec3::ZERO);
        assert_eq!(state.position(0), Vec3::ZERO);
    }

    #[test]
    fn collision_kicks_are_capped() {
        let mut p = params();
        p.max_velocity = 0.1;
        let stepper = PhysicsStepper::new(p);
        let mut state = ParticleState::from_parts(
            vec![Vec3::ZERO, Vec3::new(0.2, 0.0, 0.0)],
            vec![Vec3::ZERO; 2],
            vec![1.0, 1.0],
        );
        let report = stepper.advance(&mut state, &ctx(), 0.016);
        assert_eq!(report.contacts, 1);
        assert!(report.max_speed <= 0.1 + 1e-6);
        for i in 0..2 {
            assert!(state.velocity(i).length() <= 0.1 + 1e-6);
        }
    }
}
