use std::sync::OnceLock;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::plan::{tower, TowerPlan};
use crate::units::{Amplitude, Percent, Radians, Seconds};

static BURJ_KHALIFA: OnceLock<TowerPlan> = OnceLock::new();
static EMPIRE_STATE: OnceLock<TowerPlan> = OnceLock::new();
static WILLIS_TOWER: OnceLock<TowerPlan> = OnceLock::new();
static PETRONAS: OnceLock<TowerPlan> = OnceLock::new();
static SHANGHAI_TOWER: OnceLock<TowerPlan> = OnceLock::new();
static CN_TOWER: OnceLock<TowerPlan> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum TowerName {
    BurjKhalifa,
    EmpireState,
    WillisTower,
    Petronas,
    ShanghaiTower,
    CnTower,
}

pub fn burj_khalifa() -> TowerPlan {
    tower("Burj Khalifa")
        .sections(12)
        .cycle(Seconds(16.0))
        .construction(Percent(85.0))
        .grow_threshold(Percent(70.0))
        .orbit_speed(0.25)
        .crane(0.8, Radians(0.35))
        .pulse(Amplitude::new(0.04), 2.0)
        .build_plan()
        .expect("tower plan")
}

pub fn empire_state() -> TowerPlan {
    tower("Empire State")
        .sections(8)
        .cycle(Seconds(10.0))
        .construction(Percent(80.0))
        .grow_threshold(Percent(65.0))
        .orbit_speed(0.3)
        .crane(1.0, Radians(0.4))
        .pulse(Amplitude::new(0.05), 2.2)
        .build_plan()
        .expect("tower plan")
}

pub fn willis_tower() -> TowerPlan {
    tower("Willis Tower")
        .sections(9)
        .cycle(Seconds(12.0))
        .construction(Percent(82.5))
        .grow_threshold(Percent(70.0))
        .orbit_speed(0.35)
        .crane(0.9, Radians(0.3))
        .pulse(Amplitude::new(0.04), 1.8)
        .build_plan()
        .expect("tower plan")
}

pub fn petronas() -> TowerPlan {
    tower("Petronas")
        .sections(10)
        .cycle(Seconds(14.0))
        .construction(Percent(85.0))
        .grow_threshold(Percent(72.5))
        .orbit_speed(0.28)
        .crane(1.1, Radians(0.45))
        .pulse(Amplitude::new(0.06), 2.4)
        .build_plan()
        .expect("tower plan")
}

pub fn shanghai_tower() -> TowerPlan {
    tower("Shanghai Tower")
        .sections(11)
        .cycle(Seconds(15.0))
        .construction(Percent(87.5))
        .grow_threshold(Percent(75.0))
        .orbit_speed(0.4)
        .crane(0.7, Radians(0.25))
        .pulse(Amplitude::new(0.03), 1.6)
        .build_plan()
        .expect("tower plan")
}

pub fn cn_tower() -> TowerPlan {
    tower("CN Tower")
        .sections(6)
        .cycle(Seconds(8.0))
        .construction(Percent(75.0))
        .grow_threshold(Percent(60.0))
        .orbit_speed(0.45)
        .crane(1.3, Radians(0.5))
        .pulse(Amplitude::new(0.05), 2.8)
        .build_plan()
        .expect("tower plan")
}

pub fn get_tower_plan(tower_name: TowerName) -> TowerPlan {
    match tower_name {
        TowerName::BurjKhalifa => BURJ_KHALIFA.get_or_init(burj_khalifa),
        TowerName::EmpireState => EMPIRE_STATE.get_or_init(empire_state),
        TowerName::WillisTower => WILLIS_TOWER.get_or_init(willis_tower),
        TowerName::Petronas => PETRONAS.get_or_init(petronas),
        TowerName::ShanghaiTower => SHANGHAI_TOWER.get_or_init(shanghai_tower),
        TowerName::CnTower => CN_TOWER.get_or_init(cn_tower),
    }
    .clone()
}

pub fn all_tower_plans() -> impl Iterator<Item = TowerPlan> {
    TowerName::iter().map(get_tower_plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_resolves_to_a_plan() {
        for name in TowerName::iter() {
            let plan = get_tower_plan(name);
            assert!(!plan.name.is_empty());
            assert!(plan.config.section_count >= 1);
            assert!(plan.animator().is_ok(), "{name} should animate");
        }
    }

    #[test]
    fn test_names_parse_back() {
        for name in TowerName::iter() {
            let text = name.to_string();
            let parsed: TowerName = text.parse().expect("parseable tower name");
            assert_eq!(parsed, name);
        }
    }
}
