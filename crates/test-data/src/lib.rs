pub struct FiducialSet {
    pub points: &'static [[f32; 3]],
}

/// Three markups rising over a ridge, small enough to check by hand.
pub const RIDGE: FiducialSet = FiducialSet {
    points: &[[0.0, 0.0, 0.0], [10.0, 0.0, 0.0], [20.0, 5.0, 0.0]],
};

/// Seven markups arching over a chest, recorded in click order rather than
/// sweep order.
pub const CHEST_ARCH: FiducialSet = FiducialSet {
    points: &[
        [0.0, 105.0, 15.0],
        [-95.0, 40.0, 10.0],
        [62.0, 73.0, 12.0],
        [-30.0, 95.0, 14.0],
        [94.0, 38.0, 10.0],
        [-60.0, 75.0, 12.0],
        [30.0, 96.0, 14.0],
    ],
};
