use rand::Rng;
use std::ops::{Add, AddAssign, Mul, Sub};

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Fills a (rows, cols) matrix row by row with values uniform on [-0.5, 0.5).
    ///
    /// The draw order is fixed, so the same generator state always yields the
    /// same matrix.
    pub fn uniform<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() - 0.5;
            }
        }

        res
    }

    /// Builds an (n, 1) column vector.
    pub fn column(values: &[f64]) -> Matrix {
        Matrix {
            rows: values.len(),
            cols: 1,
            data: values.iter().map(|&v| vec![v]).collect(),
        }
    }

    /// Builds a matrix from row-major values. Panics if `values.len() != rows * cols`.
    pub fn from_row_major(rows: usize, cols: usize, values: &[f64]) -> Matrix {
        assert_eq!(values.len(), rows * cols, "Matrices are of incorrect sizes");
        let data = if cols == 0 {
            vec![Vec::new(); rows]
        } else {
            values.chunks(cols).map(|row| row.to_vec()).collect()
        };
        Matrix { rows, cols, data }
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, |row| row.len()),
            data
        }
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row-major iterator over every entry.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().flat_map(|row| row.iter().copied())
    }

    /// Flattens the matrix row-major; for a column vector this is its contents.
    pub fn to_vec(&self) -> Vec<f64> {
        self.values().collect()
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect()
        }
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, rhs: &Matrix) -> Matrix {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let data = self.data.iter().zip(rhs.data.iter())
            .map(|(row_a, row_b)| {
                row_a.iter().zip(row_b.iter()).map(|(x, y)| x * y).collect()
            })
            .collect();

        Matrix { rows: self.rows, cols: self.cols, data }
    }
}

impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        let mut res = self.clone();
        res += rhs;
        res
    }
}

impl AddAssign<&Matrix> for Matrix {
    fn add_assign(&mut self, rhs: &Matrix) {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        for (row, rhs_row) in self.data.iter_mut().zip(rhs.data.iter()) {
            for (x, y) in row.iter_mut().zip(rhs_row.iter()) {
                *x += y;
            }
        }
    }
}

impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }

        res
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn multiply_matches_hand_computation() {
        let a = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = Matrix::column(&[5.0, 6.0]);
        let c = &a * &b;
        assert_eq!(c.dims(), (2, 1));
        assert_eq!(c.to_vec(), vec![17.0, 39.0]);
    }

    #[test]
    fn transpose_swaps_shape() {
        let a = Matrix::from_row_major(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let t = a.transpose();
        assert_eq!(t.dims(), (3, 2));
        assert_eq!(t.data[2][1], 6.0);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn add_assign_updates_in_place() {
        let mut a = Matrix::from_row_major(1, 2, &[1.0, 2.0]);
        let b = Matrix::from_row_major(1, 2, &[0.5, -1.0]);
        a += &b;
        assert_eq!(a.to_vec(), vec![1.5, 1.0]);
        assert_eq!((&a - &b).to_vec(), vec![1.0, 2.0]);
        assert_eq!((&a + &b).to_vec(), vec![2.0, 0.0]);
    }

    #[test]
    fn hadamard_and_map() {
        let a = Matrix::column(&[1.0, 2.0, 3.0]);
        let b = a.map(|x| x * 2.0);
        assert_eq!(a.hadamard(&b).to_vec(), vec![2.0, 8.0, 18.0]);
    }

    #[test]
    #[should_panic(expected = "incorrect sizes")]
    fn multiply_rejects_mismatched_shapes() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 3);
        let _ = &a * &b;
    }

    #[test]
    fn uniform_is_bounded_and_reproducible() {
        let a = Matrix::uniform(4, 5, &mut ChaCha8Rng::seed_from_u64(7));
        let b = Matrix::uniform(4, 5, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(a.values().all(|v| (-0.5..0.5).contains(&v)));
    }
}
