use super::*;

#[test]
fn dense_rejects_zero_neurons() {
    assert!(matches!(
        Dense::new(0, Activation::ReLU),
        Err(ModelError::InputValidationError(_))
    ));
}

#[test]
fn dense_unbuilt_state() {
    let dense = Dense::new(3, Activation::Tanh).unwrap();

    assert!(!dense.is_built());
    assert_eq!(dense.input_features(), None);
    assert_eq!(dense.output_features(), 3);
    assert_eq!(dense.get_neurons(), 3);
    assert_eq!(dense.get_activation(), Activation::Tanh);
    assert!(dense.weights().is_none());
    assert_eq!(dense.param_count(), Err(ModelError::NotBuilt));
    assert_eq!(
        dense.forward(&Matrix::zeros(1, 2)),
        Err(ModelError::NotBuilt)
    );
}

#[test]
fn dense_build_creates_parameters_in_range() {
    let mut dense = Dense::new(3, Activation::ReLU).unwrap();
    dense.build(4, &mut StdRng::seed_from_u64(1)).unwrap();

    let weights = dense.weights().unwrap();
    let biases = dense.biases().unwrap();
    assert_eq!(weights.shape(), (4, 3));
    assert_eq!(biases.shape(), (1, 3));
    assert!(weights.iter().chain(biases.iter()).all(|&v| (-1.0..1.0).contains(&v)));
    assert_eq!(dense.input_features(), Some(4));
    assert_eq!(dense.param_count(), Ok(15));
}

#[test]
fn dense_rebuild_same_features_is_noop() {
    let mut dense = Dense::new(2, Activation::Linear).unwrap();
    dense.build(3, &mut StdRng::seed_from_u64(1)).unwrap();
    let before = dense.weights().cloned();

    dense.build(3, &mut StdRng::seed_from_u64(99)).unwrap();

    assert_eq!(dense.weights().cloned(), before);
}

#[test]
fn dense_rebuild_other_features_conflicts() {
    let mut dense = Dense::new(2, Activation::Linear).unwrap();
    dense.build(4, &mut StdRng::seed_from_u64(1)).unwrap();

    let err = dense.build(5, &mut StdRng::seed_from_u64(1)).unwrap_err();
    assert_eq!(
        err,
        ModelError::BuildConflict {
            layer: "Dense".to_string(),
            built: 4,
            requested: 5,
        }
    );
}

#[test]
fn dense_build_rejects_zero_features() {
    let mut dense = Dense::new(2, Activation::Linear).unwrap();

    assert!(dense.build(0, &mut StdRng::seed_from_u64(1)).is_err());
    assert!(!dense.is_built());
}

#[test]
fn dense_forward_adds_bias_then_activates() {
    let dense = dense_with_parameters(
        Activation::ReLU,
        &[&[1.0, -1.0], &[2.0, 0.5]],
        &[0.5, -3.0],
    );
    let input = matrix_from_rows(&[&[1.0, 1.0], &[2.0, 0.0]]);

    let output = dense.forward(&input).unwrap();

    // z = [[3.5, -3.5], [2.5, -5.0]]
    assert_eq!(output.shape(), (2, 2));
    assert_eq!(output.to_vec(), vec![3.5, 0.0, 2.5, 0.0]);
}

#[test]
fn dense_forward_rejects_wrong_feature_count() {
    let mut dense = Dense::new(2, Activation::Linear).unwrap();
    dense.build(3, &mut StdRng::seed_from_u64(4)).unwrap();

    assert!(matches!(
        dense.forward(&Matrix::zeros(5, 2)),
        Err(ModelError::ShapeMismatch {
            operation: "dot",
            left: (5, 2),
            right: (3, 2),
        })
    ));
}

#[test]
fn dense_apply_gradient_updates_parameters() {
    let mut dense = dense_with_parameters(Activation::Linear, &[&[1.0], &[2.0]], &[0.5]);
    let weight_delta = matrix_from_rows(&[&[0.25], &[-0.5]]);

    dense.apply_gradient(&weight_delta, 0.125).unwrap();

    assert_eq!(dense.weights().unwrap().to_vec(), vec![0.75, 2.5]);
    assert_eq!(dense.biases().unwrap().to_vec(), vec![0.375]);
}

#[test]
fn dense_apply_gradient_requires_build() {
    let mut dense = Dense::new(1, Activation::Linear).unwrap();

    assert_eq!(
        dense.apply_gradient(&Matrix::zeros(1, 1), 0.0),
        Err(ModelError::NotBuilt)
    );
}

#[test]
fn dense_set_parameters_validates_shapes() {
    let mut dense = Dense::new(2, Activation::Linear).unwrap();

    // Wrong neuron count
    assert!(
        dense
            .set_parameters(Matrix::zeros(3, 1), Matrix::zeros(1, 1))
            .is_err()
    );
    // Wrong bias shape
    assert!(
        dense
            .set_parameters(Matrix::zeros(3, 2), Matrix::zeros(2, 2))
            .is_err()
    );
    assert!(!dense.is_built());

    dense
        .set_parameters(Matrix::zeros(3, 2), Matrix::zeros(1, 2))
        .unwrap();
    assert_eq!(dense.input_features(), Some(3));

    // Built for 3 inputs, cannot take weights for 4
    assert!(matches!(
        dense.set_parameters(Matrix::zeros(4, 2), Matrix::zeros(1, 2)),
        Err(ModelError::BuildConflict { .. })
    ));
}

#[test]
fn dense_local_derivative_uses_activation() {
    let dense = Dense::new(1, Activation::Sigmoid).unwrap();
    let derivative = dense
        .local_derivative(&matrix_from_rows(&[&[0.5, 0.0]]))
        .unwrap();

    assert_eq!(derivative.to_vec(), vec![0.25, 0.0]);
}
