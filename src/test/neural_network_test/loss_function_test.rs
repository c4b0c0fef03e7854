use super::*;

#[test]
fn mse_loss_is_mean_of_squared_errors() {
    let prediction = matrix_from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let target = Matrix::zeros(2, 2);

    let loss = MeanSquaredError::new()
        .compute_loss(&prediction, &target)
        .unwrap();

    assert_eq!(loss.shape(), (1, 1));
    assert_relative_eq!(loss.peek(), 7.5);
}

#[test]
fn mse_loss_is_zero_for_exact_prediction() {
    let m = sequence_matrix(3, 2);
    let loss = MeanSquaredError::new().compute_loss(&m, &m).unwrap();

    assert_eq!(loss.peek(), 0.0);
}

#[test]
fn mse_gradient_is_prediction_minus_target() {
    let prediction = matrix_from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let target = matrix_from_rows(&[&[0.5, 2.0], &[4.0, 0.0]]);

    let grad = MeanSquaredError::new()
        .compute_grad(&prediction, &target)
        .unwrap();

    assert_eq!(grad.to_vec(), vec![0.5, 0.0, -1.0, 4.0]);
}

#[test]
fn mse_rejects_different_shapes() {
    let prediction = Matrix::zeros(2, 1);
    let target = Matrix::zeros(1, 2);
    let loss = MeanSquaredError::new();

    assert!(matches!(
        loss.compute_loss(&prediction, &target),
        Err(ModelError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        loss.compute_grad(&prediction, &target),
        Err(ModelError::ShapeMismatch { .. })
    ));
}

#[test]
fn mse_name() {
    assert_eq!(MeanSquaredError::new().name(), "MeanSquaredError");
}
