use std::fmt;

/// Name and parameter count of one layer.
///
/// # Fields
///
/// - `layer_type` - Type name of the layer (e.g. "Dense")
/// - `param_count` - `weights.size + biases.size`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerSummary {
    pub layer_type: String,
    pub param_count: usize,
}

/// Per-layer summary of a built model.
///
/// # Fields
///
/// - `layers` - One entry per layer, in forward order
/// - `total_params` - Sum of every layer's parameter count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSummary {
    pub layers: Vec<LayerSummary>,
    pub total_params: usize,
}

impl ModelSummary {
    pub(crate) fn new(layers: Vec<LayerSummary>) -> Self {
        let total_params = layers.iter().map(|layer| layer.param_count).sum();
        Self {
            layers,
            total_params,
        }
    }
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col1_width = 33;
        let col2_width = 15;
        writeln!(f, "Model: \"sequential\"")?;
        writeln!(
            f,
            "┏{}┳{}┓",
            "━".repeat(col1_width),
            "━".repeat(col2_width)
        )?;
        writeln!(f, "┃ {:<31} ┃ {:>13} ┃", "Layer (type)", "Param #")?;
        writeln!(
            f,
            "┡{}╇{}┩",
            "━".repeat(col1_width),
            "━".repeat(col2_width)
        )?;

        for (i, layer) in self.layers.iter().enumerate() {
            // First layer is named "Layer", then "Layer_1", "Layer_2", etc.
            let layer_name = if i == 0 {
                "Layer".to_string()
            } else {
                format!("Layer_{}", i)
            };
            writeln!(
                f,
                "│ {:<31} │ {:>13} │",
                format!("{} ({})", layer_name, layer.layer_type),
                layer.param_count
            )?;
        }

        writeln!(
            f,
            "└{}┴{}┘",
            "─".repeat(col1_width),
            "─".repeat(col2_width)
        )?;
        writeln!(
            f,
            " Total params: {} ({} B)",
            self.total_params,
            self.total_params * std::mem::size_of::<f64>()
        )?;
        write!(f, " Layers: {}", self.layers.len())
    }
}
