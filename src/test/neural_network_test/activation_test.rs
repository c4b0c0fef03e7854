use super::*;

#[test]
fn linear_is_identity_with_unit_derivative() {
    let z = matrix_from_rows(&[&[-2.0, 0.0, 3.5]]);

    assert_eq!(Activation::Linear.forward(&z), z);
    assert_eq!(Activation::Linear.derivative(&z).to_vec(), vec![1.0; 3]);
}

#[test]
fn relu_clamps_negatives() {
    let z = matrix_from_rows(&[&[-2.0, 0.0, 3.5]]);
    let y = Activation::ReLU.forward(&z);

    assert_eq!(y.to_vec(), vec![0.0, 0.0, 3.5]);
    assert_eq!(Activation::ReLU.derivative(&y).to_vec(), vec![0.0, 0.0, 1.0]);
}

#[test]
fn sigmoid_values_and_derivative() {
    let z = matrix_from_rows(&[&[0.0, 100.0, -100.0]]);
    let y = Activation::Sigmoid.forward(&z);

    assert_relative_eq!(y.get(0, 0), 0.5);
    assert!(y.get(0, 1) > 0.999);
    assert!(y.get(0, 2) < 0.001);

    // Derivative is evaluated on the activated value
    let d = Activation::Sigmoid.derivative(&matrix_from_rows(&[&[0.5]]));
    assert_relative_eq!(d.peek(), 0.25);
}

#[test]
fn tanh_values_and_derivative() {
    let z = matrix_from_rows(&[&[0.0, 1.0]]);
    let y = Activation::Tanh.forward(&z);

    assert_relative_eq!(y.get(0, 0), 0.0);
    assert_relative_eq!(y.get(0, 1), 1.0_f64.tanh());

    let d = Activation::Tanh.derivative(&y);
    assert_relative_eq!(d.get(0, 0), 1.0);
    assert_relative_eq!(d.get(0, 1), 1.0 - 1.0_f64.tanh().powi(2));
}

#[test]
fn softmax_rows_are_distributions() {
    let z = matrix_from_rows(&[
        &[1.0, 2.0, 3.0],
        &[-5.0, -6.0, -7.0],
        &[1000.0, 1000.0, 999.0],
        &[0.0, 0.0, 0.0],
    ]);
    let y = Activation::Softmax.forward(&z);

    assert_eq!(y.shape(), z.shape());
    for i in 0..y.rows() {
        let row_sum: f64 = (0..y.cols()).map(|j| y.get(i, j)).sum();
        assert_abs_diff_eq!(row_sum, 1.0, epsilon = 1e-9);
        for j in 0..y.cols() {
            assert!(y.get(i, j) > 0.0 && y.get(i, j) <= 1.0);
        }
    }

    // Larger inputs get larger probabilities
    assert!(y.get(0, 2) > y.get(0, 1));
    assert!(y.get(1, 0) > y.get(1, 2));
    assert_abs_diff_eq!(y.get(3, 0), 1.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn softmax_derivative_matches_relu_rule() {
    let y = matrix_from_rows(&[&[0.2, 0.0, 0.8]]);
    assert_eq!(
        Activation::Softmax.derivative(&y),
        Activation::ReLU.derivative(&y)
    );
}

#[test]
fn activation_names() {
    let names: Vec<&str> = [
        Activation::Linear,
        Activation::ReLU,
        Activation::Sigmoid,
        Activation::Tanh,
        Activation::Softmax,
    ]
    .iter()
    .map(Activation::name)
    .collect();

    assert_eq!(names, vec!["Linear", "ReLU", "Sigmoid", "Tanh", "Softmax"]);
}
