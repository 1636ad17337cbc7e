//! Exports from converted resources to external tools

mod enemy_list;

pub use enemy_list::{
    EnemyEntry, EnemyExport, collect_enemies, enemy_from_fields, export_enemy_list,
    write_enemy_list,
};
