//! Schema-driven panel rendering. A single renderer serves every entity
//! kind: a [`Schema`] names the display cells and the control identifiers
//! that act on the entity, and a [`Panel`] is the container whose content
//! is thrown away and rebuilt wholesale on every render. Data sets are
//! small, so there is no diffing and no keyed state across renders.

use shared::models::{Farm, FarmSummary, Gpu, Rig};

type CellFn<T> = fn(&T) -> String;

/// Display description for one entity kind: its cells and the control
/// identifiers that can act on a rendered row.
pub struct Schema<T> {
    cells: Vec<CellFn<T>>,
    pub actions: &'static [&'static str],
}

impl<T> Schema<T> {
    /// Cells joined with `" | "`, the row format of the original panel.
    pub fn row(&self, item: &T) -> String {
        self.cells
            .iter()
            .map(|cell| cell(item))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

fn gpu_name(gpu: &Gpu) -> String {
    gpu.name.clone()
}

fn gpu_temp(gpu: &Gpu) -> String {
    format!("Temp: {}°C", gpu.temp)
}

fn gpu_watt(gpu: &Gpu) -> String {
    format!("Watt: {}W", gpu.watt)
}

fn rig_label(rig: &Rig) -> String {
    format!("Rig: {}", rig.name)
}

fn rig_location(rig: &Rig) -> String {
    format!("Location: {}", rig.location.as_deref().unwrap_or("Unknown"))
}

fn farm_label(farm: &Farm) -> String {
    format!("Farm: {}", farm.name)
}

fn farm_location(farm: &Farm) -> String {
    format!("Location: {}", farm.location.as_deref().unwrap_or("Unknown"))
}

pub fn gpu_schema() -> Schema<Gpu> {
    Schema {
        cells: vec![gpu_name, gpu_temp, gpu_watt],
        actions: &["deleteGpu"],
    }
}

pub fn rig_schema() -> Schema<Rig> {
    Schema {
        cells: vec![rig_label, rig_location],
        actions: &["moveRig"],
    }
}

pub fn farm_schema() -> Schema<Farm> {
    Schema {
        cells: vec![farm_label, farm_location],
        actions: &["editFarm", "deleteFarm", "showRigs"],
    }
}

/// The render container. Every render replaces all lines; nothing is
/// retained from the previous content.
#[derive(Debug, Default)]
pub struct Panel {
    lines: Vec<String>,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_with<T>(&mut self, schema: &Schema<T>, items: &[T]) {
        self.lines.clear();
        self.lines.extend(items.iter().map(|item| schema.row(item)));
    }

    pub fn replace_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Hierarchical farm rendering: rigs indented under their farm, GPUs
/// under their rig.
pub fn farm_tree(farm: &Farm) -> Vec<String> {
    let farms = farm_schema();
    let rigs = rig_schema();
    let gpus = gpu_schema();

    let mut lines = vec![farms.row(farm)];
    for rig in &farm.rigs {
        lines.push(format!("  {}", rigs.row(rig)));
        for gpu in &rig.gpus {
            lines.push(format!("    GPU: {}", gpus.row(gpu)));
        }
    }
    lines
}

pub fn farms_tree(farms: &[Farm]) -> Vec<String> {
    farms.iter().flat_map(farm_tree).collect()
}

pub fn rigs_tree(rigs: &[Rig]) -> Vec<String> {
    let rig_schema = rig_schema();
    let gpu_schema = gpu_schema();

    let mut lines = Vec::new();
    for rig in rigs {
        lines.push(rig_schema.row(rig));
        for gpu in &rig.gpus {
            lines.push(format!("  GPU: {}", gpu_schema.row(gpu)));
        }
    }
    lines
}

/// The farm dropdown counterpart: `(id, label)` options, rebuilt wholesale
/// like the panel.
#[derive(Debug, Default)]
pub struct Selector {
    options: Vec<(i64, String)>,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_with(&mut self, farms: &[FarmSummary]) {
        self.options = farms
            .iter()
            .map(|farm| (farm.id, farm.name.clone()))
            .collect();
    }

    pub fn options(&self) -> &[(i64, String)] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gpu(id: i64, name: &str, temp: f64, watt: f64) -> Gpu {
        Gpu {
            id,
            name: name.to_string(),
            temp,
            watt,
            rig_id: None,
        }
    }

    #[test]
    fn gpu_row_matches_original_format() {
        let schema = gpu_schema();
        assert_eq!(
            schema.row(&gpu(1, "A", 60.0, 200.0)),
            "A | Temp: 60°C | Watt: 200W"
        );
        assert_eq!(
            schema.row(&gpu(2, "RTX 3080", 61.5, 220.0)),
            "RTX 3080 | Temp: 61.5°C | Watt: 220W"
        );
    }

    #[test]
    fn panel_render_is_full_replacement() {
        let schema = gpu_schema();
        let mut panel = Panel::new();

        panel.replace_with(&schema, &[gpu(1, "A", 60.0, 200.0), gpu(2, "B", 70.0, 250.0)]);
        assert_eq!(panel.lines().len(), 2);

        panel.replace_with(&schema, &[gpu(2, "B", 70.0, 250.0)]);
        assert_eq!(panel.lines(), ["B | Temp: 70°C | Watt: 250W"]);
    }

    #[test]
    fn farm_without_location_renders_unknown() {
        let farm = Farm {
            id: 1,
            name: "north".to_string(),
            location: None,
            rigs: vec![],
        };
        assert_eq!(farm_tree(&farm), ["Farm: north | Location: Unknown"]);
    }

    #[test]
    fn farm_tree_indents_children() {
        let farm = Farm {
            id: 1,
            name: "north".to_string(),
            location: Some("halle".to_string()),
            rigs: vec![Rig {
                id: 3,
                name: "rack-a".to_string(),
                mac_address: String::new(),
                location: Some("row 1".to_string()),
                farm_id: Some(1),
                gpus: vec![gpu(1, "A", 60.0, 200.0)],
            }],
        };
        assert_eq!(
            farm_tree(&farm),
            [
                "Farm: north | Location: halle",
                "  Rig: rack-a | Location: row 1",
                "    GPU: A | Temp: 60°C | Watt: 200W",
            ]
        );
    }

    #[test]
    fn schemas_carry_their_action_sets() {
        assert!(gpu_schema().actions.contains(&"deleteGpu"));
        assert!(rig_schema().actions.contains(&"moveRig"));
        assert!(farm_schema().actions.contains(&"editFarm"));
    }

    #[test]
    fn selector_is_rebuilt_wholesale() {
        let mut selector = Selector::new();
        selector.replace_with(&[
            FarmSummary {
                id: 1,
                name: "north".to_string(),
            },
            FarmSummary {
                id: 2,
                name: "south".to_string(),
            },
        ]);
        assert_eq!(selector.options().len(), 2);

        selector.replace_with(&[FarmSummary {
            id: 2,
            name: "south".to_string(),
        }]);
        assert_eq!(selector.options(), [(2, "south".to_string())]);
    }
}
