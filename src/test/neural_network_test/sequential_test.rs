use super::*;
use crate::IoError;

fn two_layer_model() -> Sequential {
    Sequential::new(vec![
        Box::new(Dense::new(3, Activation::ReLU).unwrap()) as Box<dyn Layer>,
        Box::new(Dense::new(1, Activation::Linear).unwrap()),
    ])
    .unwrap()
}

#[test]
fn sequential_rejects_empty_layer_list() {
    let result = Sequential::new(Vec::<Box<dyn Layer>>::new());
    assert!(matches!(result, Err(ModelError::InputValidationError(_))));
}

#[test]
fn sequential_build_chains_feature_counts() {
    let mut model = two_layer_model();
    assert!(!model.is_built());

    model.build_with_seed(4, 0).unwrap();

    assert!(model.is_built());
    assert_eq!(model.len(), 2);
    assert_eq!(model.layers()[0].input_features(), Some(4));
    assert_eq!(model.layers()[1].input_features(), Some(3));
    assert_eq!(model.layers()[1].weights().unwrap().shape(), (3, 1));
}

#[test]
fn sequential_build_is_reproducible_with_seed() {
    let mut a = two_layer_model();
    let mut b = two_layer_model();
    a.build_with_seed(4, 7).unwrap();
    b.build_with_seed(4, 7).unwrap();

    for (left, right) in a.layers().iter().zip(b.layers()) {
        assert_eq!(left.weights(), right.weights());
        assert_eq!(left.biases(), right.biases());
    }
}

#[test]
fn sequential_rebuild_with_other_features_conflicts() {
    let mut model = two_layer_model();
    model.build_with_seed(4, 0).unwrap();

    assert!(model.build_with_seed(4, 1).is_ok());
    assert!(matches!(
        model.build_with_seed(2, 1),
        Err(ModelError::BuildConflict {
            built: 4,
            requested: 2,
            ..
        })
    ));
}

#[test]
fn sequential_activate_keeps_every_layer_output() {
    let mut model = two_layer_model();
    model.build_with_seed(4, 3).unwrap();
    let input = Matrix::filled(5, 4, 0.5);

    let activations = model.activate(&input).unwrap();

    assert_eq!(activations.len(), 3);
    assert_eq!(activations[0], input);
    assert_eq!(activations[1].shape(), (5, 3));
    assert_eq!(activations[2].shape(), (5, 1));
    assert_eq!(model.predict(&input).unwrap(), activations[2]);
}

#[test]
fn sequential_unbuilt_model_reports_not_built() {
    let model = two_layer_model();
    let input = Matrix::zeros(1, 4);

    assert_eq!(model.predict(&input), Err(ModelError::NotBuilt));
    assert_eq!(model.summary(), Err(ModelError::NotBuilt));
}

#[test]
fn sequential_predict_rejects_wrong_feature_count() {
    let mut model = two_layer_model();
    model.build_with_seed(4, 3).unwrap();

    assert!(matches!(
        model.predict(&Matrix::zeros(2, 3)),
        Err(ModelError::ShapeMismatch { .. })
    ));
}

#[test]
fn sequential_summary_counts_parameters() {
    let mut model = two_layer_model();
    model.build_with_seed(4, 0).unwrap();

    let summary = model.summary().unwrap();

    assert_eq!(summary.layers.len(), 2);
    assert_eq!(summary.layers[0].layer_type, "Dense");
    assert_eq!(summary.layers[0].param_count, 15);
    assert_eq!(summary.layers[1].param_count, 4);
    assert_eq!(summary.total_params, 19);

    let text = summary.to_string();
    assert!(text.contains("Layer (type)"));
    assert!(text.contains("Layer_1 (Dense)"));
    assert!(text.contains("Total params: 19"));
}

#[test]
fn sequential_save_and_load_round_trip() {
    let path = std::env::temp_dir().join(format!(
        "rustynet_{}_sequential_round_trip.json",
        std::process::id()
    ));
    let path = path.to_str().unwrap();

    let mut model = two_layer_model();
    model.build_with_seed(4, 21).unwrap();
    model.save_to_path(path).unwrap();

    let mut restored = two_layer_model();
    restored.load_from_path(path).unwrap();
    std::fs::remove_file(path).unwrap();

    assert!(restored.is_built());
    let input = Matrix::filled(3, 4, 0.25);
    assert_eq!(
        restored.predict(&input).unwrap(),
        model.predict(&input).unwrap()
    );
}

#[test]
fn sequential_save_requires_build() {
    let path = std::env::temp_dir().join(format!(
        "rustynet_{}_sequential_unbuilt.json",
        std::process::id()
    ));

    let result = two_layer_model().save_to_path(path.to_str().unwrap());
    assert!(matches!(result, Err(IoError::Model(ModelError::NotBuilt))));
}

#[test]
fn sequential_load_rejects_other_layer_count() {
    let path = std::env::temp_dir().join(format!(
        "rustynet_{}_sequential_layer_count.json",
        std::process::id()
    ));
    let path = path.to_str().unwrap();

    let mut model = two_layer_model();
    model.build_with_seed(4, 0).unwrap();
    model.save_to_path(path).unwrap();

    let mut single = Sequential::new(vec![
        Box::new(Dense::new(1, Activation::Linear).unwrap()) as Box<dyn Layer>,
    ])
    .unwrap();
    let result = single.load_from_path(path);
    std::fs::remove_file(path).unwrap();

    assert!(matches!(result, Err(IoError::InvalidFormat(_))));
}

fn stored_dense(weights: Matrix, bias: f64) -> SerializableLayer {
    let biases = Matrix::filled(1, weights.cols(), bias);
    SerializableLayer {
        layer_type: "Dense".to_string(),
        weights,
        biases,
    }
}

fn write_model_file(name: &str, layers: Vec<SerializableLayer>) -> String {
    let path = std::env::temp_dir().join(format!("rustynet_{}_{}", std::process::id(), name));
    let file = std::fs::File::create(&path).unwrap();
    serde_json::to_writer(file, &SerializableSequential { layers }).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn sequential_load_rejects_layers_that_do_not_chain() {
    // Layer 0 outputs 3 features, layer 1 expects 7
    let path = write_model_file(
        "sequential_unchained.json",
        vec![
            stored_dense(Matrix::filled(2, 3, 0.5), 0.0),
            stored_dense(Matrix::filled(7, 1, 0.5), 0.0),
        ],
    );

    let mut model = two_layer_model();
    let result = model.load_from_path(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(result, Err(IoError::InvalidFormat(_))));
    assert!(!model.is_built());
    assert!(model.layers().iter().all(|layer| layer.weights().is_none()));
}

#[test]
fn sequential_failed_load_leaves_parameters_unchanged() {
    let mut model = two_layer_model();
    model.build_with_seed(2, 13).unwrap();
    let before: Vec<Option<Matrix>> = model
        .layers()
        .iter()
        .map(|layer| layer.weights().cloned())
        .collect();

    // Layer 0 fits the model, layer 1 does not chain after it
    let path = write_model_file(
        "sequential_partial.json",
        vec![
            stored_dense(Matrix::filled(2, 3, 9.0), 9.0),
            stored_dense(Matrix::filled(5, 1, 9.0), 9.0),
        ],
    );
    let result = model.load_from_path(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(result.is_err());
    let after: Vec<Option<Matrix>> = model
        .layers()
        .iter()
        .map(|layer| layer.weights().cloned())
        .collect();
    assert_eq!(after, before);
    assert!(model.predict(&Matrix::zeros(1, 2)).is_ok());
}

#[test]
fn sequential_failed_load_on_built_layer_leaves_parameters_unchanged() {
    let mut model = two_layer_model();
    model.build_with_seed(4, 13).unwrap();
    let first_before = model.layers()[0].weights().cloned();

    // Chains, but layer 0 was built for 4 inputs, not 2
    let path = write_model_file(
        "sequential_conflict.json",
        vec![
            stored_dense(Matrix::filled(2, 3, 9.0), 9.0),
            stored_dense(Matrix::filled(3, 1, 9.0), 9.0),
        ],
    );
    let result = model.load_from_path(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(
        result,
        Err(IoError::Model(ModelError::BuildConflict {
            built: 4,
            requested: 2,
            ..
        }))
    ));
    assert_eq!(model.layers()[0].weights().cloned(), first_before);
    assert!(model.layers()[1].weights().unwrap().iter().all(|&w| w != 9.0));
}

#[test]
fn sequential_load_rejects_wrong_bias_shape() {
    let mut bad = stored_dense(Matrix::filled(2, 3, 0.1), 0.0);
    bad.biases = Matrix::zeros(1, 2);
    let path = write_model_file(
        "sequential_bias_shape.json",
        vec![bad, stored_dense(Matrix::filled(3, 1, 0.1), 0.0)],
    );

    let mut model = two_layer_model();
    let result = model.load_from_path(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(result, Err(IoError::InvalidFormat(_))));
    assert!(!model.is_built());
}
