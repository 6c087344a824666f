use battle_core::{BattleConfig, FightOutcome};
use battle_regression::{replay, DEFAULT_SCRIPT};

#[test]
fn default_script_loses_to_flappy() {
    let trace = replay(&BattleConfig::default(), DEFAULT_SCRIPT).unwrap();
    assert_eq!(Some(FightOutcome::Defeat), trace.outcome);
    assert_eq!(
        vec!["Player Money 3", "Enemy Power 10"],
        trace.steps[2].lines
    );
    assert_eq!(vec!["Player Health -1", "Enemy Power 10"], trace.steps[4].lines);
}

#[test]
fn tie_is_a_victory() {
    let config = BattleConfig::from_toml_str("[enemy]\npower = 2\n").unwrap();
    let trace = replay(&config, "power+,power+,fight").unwrap();
    insta::assert_json_snapshot!(trace, @r###"
    {
      "steps": [
        {
          "action": "power+",
          "lines": [
            "Player Power 1",
            "Enemy Power 2"
          ]
        },
        {
          "action": "power+",
          "lines": [
            "Player Power 2",
            "Enemy Power 2"
          ]
        },
        {
          "action": "fight",
          "lines": [
            "Victory: player 2, enemy 2"
          ]
        }
      ],
      "outcome": "victory"
    }
    "###);
}

#[test]
fn fight_without_changes_renders_no_labels() {
    let trace = replay(&BattleConfig::default(), "fight").unwrap();
    insta::assert_json_snapshot!(trace, @r###"
    {
      "steps": [
        {
          "action": "fight",
          "lines": [
            "Defeat: player 0, enemy 10"
          ]
        }
      ],
      "outcome": "defeat"
    }
    "###);
}

#[test]
fn presses_after_fight_are_ignored() {
    let trace = replay(&BattleConfig::default(), "fight,power+,fight").unwrap();
    insta::assert_json_snapshot!(trace, @r###"
    {
      "steps": [
        {
          "action": "fight",
          "lines": [
            "Defeat: player 0, enemy 10"
          ]
        },
        {
          "action": "power+",
          "lines": [],
          "ignored": true
        },
        {
          "action": "fight",
          "lines": [],
          "ignored": true
        }
      ],
      "outcome": "defeat"
    }
    "###);
}
