#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::AudioEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, SimTime, Velocity, Viewport};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Menu,
            GamePhase::Playing,
            GamePhase::Paused,
            GamePhase::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_raider_archetype_serde() {
        let variants = vec![
            RaiderArchetype::Footman,
            RaiderArchetype::Knight,
            RaiderArchetype::Skirmisher,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: RaiderArchetype = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_pickup_kind_serde() {
        let variants = vec![
            PickupKind::RapidFire,
            PickupKind::Spread,
            PickupKind::Damage,
            PickupKind::Heal,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: PickupKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartGame,
            PlayerCommand::ResetGame,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::MoveLeft { held: true },
            PlayerCommand::MoveRight { held: false },
            PlayerCommand::FireHeld { held: true },
            PlayerCommand::AimAt { x: 120.0, y: 340.5 },
            PlayerCommand::FocusLost,
            PlayerCommand::ClickAt { x: 5.0, y: 9.0 },
        ];
        for cmd in commands {
            let json = serde_json::to_string(&cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(
                serde_json::to_string(&back).unwrap(),
                serde_json::to_string(&cmd).unwrap()
            );
        }
    }

    #[test]
    fn test_audio_event_serde_tag() {
        let json = serde_json::to_string(&AudioEvent::Fire).unwrap();
        assert_eq!(json, r#"{"type":"Fire"}"#);
        let back: AudioEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AudioEvent::Fire);
    }

    #[test]
    fn test_position_distance_and_angle() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);

        let right = Position::new(10.0, 0.0);
        assert!((a.angle_to(&right) - 0.0).abs() < 1e-12);
        let down = Position::new(0.0, 10.0);
        assert!((a.angle_to(&down) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_velocity_from_angle() {
        let v = Velocity::from_angle(0.0, 900.0);
        assert!((v.x - 900.0).abs() < 1e-9);
        assert!(v.y.abs() < 1e-9);
        assert!((v.speed() - 900.0).abs() < 1e-9);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(1.0 / 60.0);
        time.advance(1.0 / 60.0);
        assert_eq!(time.tick, 2);
        assert!((time.elapsed_secs - 2.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_gate_center() {
        let view = Viewport {
            width: VIEW_WIDTH,
            height: VIEW_HEIGHT,
        };
        let gate = view.gate_center();
        assert_eq!(gate.x, VIEW_WIDTH / 2.0);
        assert_eq!(gate.y, KEEP_Y + KEEP_HEIGHT / 2.0);
    }

    /// The default snapshot serializes; the shell may render before the
    /// first tick lands.
    #[test]
    fn test_default_snapshot_serializes() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"Menu\""));
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Menu);
        assert!(back.raiders.is_empty());
    }

    /// Tuning values stay inside the ranges the formulas assume.
    #[test]
    fn test_constant_sanity() {
        assert!(WEAPON_COOLDOWN_FLOOR < WEAPON_BASE_COOLDOWN);
        assert!(WEAPON_COOLDOWN_FACTOR < 1.0);
        assert!(SPAWN_CADENCE_FLOOR < SPAWN_CADENCE_BASE);
        assert!(FOOTMAN_SHARE_BASE < SKIRMISHER_SHARE_CEIL);
        assert!(LANE_SPAWN_PROB < 1.0);
        assert!(WAVE_QUOTA_MIN < WAVE_QUOTA_CAP);
        assert!(FRAME_DT_CAP > 1.0 / FRAME_RATE as f64);
    }
}
