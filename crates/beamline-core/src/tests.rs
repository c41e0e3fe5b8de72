#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::commands::BeamCommand;
    use crate::components::Collider;
    use crate::config::BeamConfig;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::BeamError;
    use crate::events::BeamEvent;
    use crate::state::BeamSnapshot;
    use crate::types::*;

    #[test]
    fn test_default_config_matches_weapon_defaults() {
        let config = BeamConfig::default();
        assert_eq!(config.damage, 50.0);
        assert_eq!(config.damage_interval, 0.5);
        assert_eq!(config.bounce_max, 3);
        assert_eq!(config.penetration_max, 2);
        assert_eq!(config.max_range, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let config: BeamConfig =
            serde_json::from_str(r#"{ "bounce_max": 0, "owner": 7 }"#).unwrap();
        assert_eq!(config.bounce_max, 0);
        assert_eq!(config.owner, OwnerId(7));
        assert_eq!(config.penetration_max, DEFAULT_PENETRATION_MAX);
        assert_eq!(config.max_range, DEFAULT_MAX_RANGE);
    }

    #[test]
    fn test_config_validation_rejects_bad_values() {
        let negative_range = BeamConfig {
            max_range: -1.0,
            ..Default::default()
        };
        assert_eq!(
            negative_range.validate(),
            Err(BeamError::InvalidConfig {
                field: "max_range",
                reason: "must be finite and non-negative",
            })
        );

        let nan_interval = BeamConfig {
            damage_interval: f64::NAN,
            ..Default::default()
        };
        assert!(nan_interval.validate().is_err());

        let zero_range = BeamConfig {
            max_range: 0.0,
            ..Default::default()
        };
        assert!(zero_range.validate().is_ok(), "zero range collapses the beam, it is not invalid");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            BeamError::InvalidDirection.to_string(),
            "beam direction must be a finite, non-zero vector"
        );
        assert_eq!(
            BeamError::InvalidOrigin.to_string(),
            "beam origin must be a finite point"
        );
        let err = BeamError::InvalidConfig {
            field: "damage",
            reason: "must be finite and non-negative",
        };
        assert!(err.to_string().contains("`damage`"));
    }

    #[test]
    fn test_sim_time_lands_on_exact_half_second() {
        let mut time = SimTime::default();
        for _ in 0..(TICK_RATE / 2) {
            time.advance();
        }
        assert_eq!(time.tick, (TICK_RATE / 2) as u64);
        assert_eq!(time.now(), 0.5);
    }

    #[test]
    fn test_beam_path_geometry() {
        let mut path = BeamPath::starting_at(Vec3::ZERO);
        path.push(Vec3::new(0.0, 0.0, 10.0));
        path.push(Vec3::new(5.0, 0.0, 10.0));

        assert_eq!(path.len(), 3);
        assert_eq!(path.origin(), Some(Vec3::ZERO));
        assert_eq!(path.end(), Some(Vec3::new(5.0, 0.0, 10.0)));
        assert_eq!(path.segments().count(), 2);
        assert!((path.length() - 15.0).abs() < 1e-5);
    }

    #[test]
    fn test_single_point_path_has_no_length() {
        let path = BeamPath::starting_at(Vec3::ONE);
        assert_eq!(path.segments().count(), 0);
        assert_eq!(path.length(), 0.0);
    }

    #[test]
    fn test_command_tagged_json() {
        let json = r#"{
            "type": "StartFiring",
            "owner": 1,
            "origin": [0.0, 1.0, 0.0],
            "direction": [0.0, 0.0, 1.0]
        }"#;
        let cmd: BeamCommand = serde_json::from_str(json).unwrap();
        match cmd {
            BeamCommand::StartFiring {
                owner,
                origin,
                direction,
                config,
            } => {
                assert_eq!(owner, OwnerId(1));
                assert_eq!(origin, Vec3::Y);
                assert_eq!(direction, Vec3::Z);
                assert!(config.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }

        let stop: BeamCommand = serde_json::from_str(r#"{ "type": "StopFiring", "owner": 1 }"#).unwrap();
        assert!(matches!(stop, BeamCommand::StopFiring { owner: OwnerId(1) }));
    }

    #[test]
    fn test_collider_tagged_json() {
        let disc: Collider = serde_json::from_str(
            r#"{ "shape": "Disc", "normal": [1.0, 0.0, -1.0], "radius": 2.0 }"#,
        )
        .unwrap();
        assert_eq!(
            disc,
            Collider::Disc {
                normal: Vec3::new(1.0, 0.0, -1.0),
                radius: 2.0
            }
        );
    }

    #[test]
    fn test_snapshot_serializes_events_with_type_tag() {
        let snapshot = BeamSnapshot {
            events: vec![BeamEvent::TargetDestroyed {
                target: TargetId(3),
                position: Vec3::ZERO,
            }],
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains(r#""type":"TargetDestroyed""#));

        let back: BeamSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.events, snapshot.events);
    }
}
