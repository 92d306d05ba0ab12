#[cfg(test)]
mod property_tests {
    use crate::simulation::*;
    use glam::Vec3;
    use proptest::prelude::*;

    fn position() -> impl Strategy<Value = Vec3> {
        (-0.6f32..0.6, -0.5f32..1.0, -0.6f32..0.6).prop_map(|(x, y, z)| Vec3::new(x, y, z))
    }

    fn displacement() -> impl Strategy<Value = Vec3> {
        (-0.05f32..0.05, -0.05f32..0.05, -0.05f32..0.05)
            .prop_map(|(x, y, z)| Vec3::new(x, y, z))
    }

    fn step_params() -> impl Strategy<Value = StepParams> {
        (0.05f32..0.95).prop_map(|damping| StepParams {
            damping,
            ..StepParams::default()
        })
    }

    proptest! {
        #[test]
        fn reflection_never_adds_energy(
            current in position(),
            delta in displacement(),
            tick in 0u64..10_000,
            params in step_params(),
        ) {
            let surface = RippleBowl::default();
            let step = ParticleKernel::step(current - delta, current, tick, &params, &surface);
            if let Some(reflected) = step.reflected {
                prop_assert!(reflected.length() <= step.velocity.length() * (1.0 + 1e-5) + 1e-7);
            }
        }

        #[test]
        fn outside_bound_is_free_fall(
            current in position(),
            delta in displacement(),
            tick in 0u64..10_000,
        ) {
            let params = StepParams::default();
            let surface = RippleBowl::default();
            let previous = current - delta;
            let velocity = current - previous + params.gravity;
            let candidate = current + velocity;
            prop_assume!(
                candidate.x.abs() >= params.horizontal_bound
                    || candidate.z.abs() >= params.horizontal_bound
            );

            let step = ParticleKernel::step(previous, current, tick, &params, &surface);
            prop_assert!(!step.collided());
            prop_assert_eq!(step.position, candidate);
        }

        #[test]
        fn corrected_position_not_below_surface(
            current in position(),
            delta in displacement(),
            tick in 0u64..10_000,
            params in step_params(),
        ) {
            let surface = RippleBowl::default();
            let step = ParticleKernel::step(current - delta, current, tick, &params, &surface);
            if step.collided() {
                let floor = step.surface_height - params.ground_offset.y;
                prop_assert!(step.position.y >= floor - 1e-5);
                prop_assert!(step.position.y + params.ground_offset.y >= floor - 1e-5);
            }
        }

        #[test]
        fn step_is_deterministic(
            current in position(),
            delta in displacement(),
            tick in 0u64..10_000,
        ) {
            let params = StepParams::default();
            let surface = RippleBowl::default();
            let a = ParticleKernel::step(current - delta, current, tick, &params, &surface);
            let b = ParticleKernel::step(current - delta, current, tick, &params, &surface);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn roles_never_alias(tick in 0u64..1_000_000) {
            let previous = StateRing::slot_for(tick, Role::Previous);
            let current = StateRing::slot_for(tick, Role::Current);
            let next = StateRing::slot_for(tick, Role::Next);

            prop_assert_ne!(previous, current);
            prop_assert_ne!(current, next);
            prop_assert_ne!(previous, next);
            prop_assert_eq!(StateRing::slot_for(tick + 1, Role::Current), next);
            prop_assert_eq!(StateRing::slot_for(tick + 3, Role::Current), current);
        }
    }

    #[test]
    fn current_slot_cycles_with_period_three() {
        let cycle: Vec<usize> = (0..4)
            .map(|t| StateRing::slot_for(t, Role::Current))
            .collect();
        assert_eq!(cycle, vec![1, 2, 0, 1]);
        for t in 0..4 {
            assert_ne!(
                StateRing::slot_for(t, Role::Current),
                StateRing::slot_for(t, Role::Next)
            );
        }
    }
}
