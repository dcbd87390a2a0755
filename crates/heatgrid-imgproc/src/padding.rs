/// How indices falling outside a grid axis are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderMode {
    /// Out-of-range cells contribute zero.
    ///
    /// Example: ...0 0 0 0 | a b c d | 0 0 0 0...
    Constant,

    /// Repeat the outermost cell.
    ///
    /// Example: ...a a a a | a b c d | d d d d...
    Replicate,

    /// Mirror about the edge, repeating the edge cell.
    ///
    /// Example: ...d c b a | a b c d | d c b a...
    #[default]
    Reflect,

    /// Mirror about the edge cell, without repeating it.
    ///
    /// Example: ...e d c b | a b c d e | d c b a...
    Reflect101,

    /// Wrap around to the opposite side.
    ///
    /// Example: ...a b c d | a b c d | a b c d...
    Wrap,
}

impl BorderMode {
    // period 2 * len: edge cells repeat
    #[inline]
    fn reflect(i: isize, len: usize) -> usize {
        let period = 2 * len as isize;
        let m = i.rem_euclid(period);
        m.min(period - 1 - m) as usize
    }

    // period 2 * (len - 1): edge cells do not repeat
    #[inline]
    fn reflect101(i: isize, len: usize) -> usize {
        if len == 1 {
            return 0;
        }
        let period = 2 * (len as isize - 1);
        let m = i.rem_euclid(period);
        m.min(period - m) as usize
    }

    #[inline]
    fn wrap(i: isize, len: usize) -> usize {
        i.rem_euclid(len as isize) as usize
    }

    /// Maps index `i` to a valid index within `[0, len)` according to the border mode.
    ///
    /// Returns `None` for [`BorderMode::Constant`] when `i` is out of range,
    /// meaning the tap reads zero.
    ///
    /// PRECONDITION: `len > 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use heatgrid_imgproc::padding::BorderMode;
    ///
    /// assert_eq!(BorderMode::Reflect.map_index(-1, 4), Some(0));
    /// assert_eq!(BorderMode::Reflect.map_index(5, 4), Some(2));
    /// assert_eq!(BorderMode::Constant.map_index(4, 4), None);
    /// ```
    #[inline]
    pub fn map_index(&self, i: isize, len: usize) -> Option<usize> {
        if i >= 0 && (i as usize) < len {
            return Some(i as usize);
        }
        match self {
            BorderMode::Constant => None,
            BorderMode::Replicate => Some(i.clamp(0, len as isize - 1) as usize),
            BorderMode::Reflect => Some(Self::reflect(i, len)),
            BorderMode::Reflect101 => Some(Self::reflect101(i, len)),
            BorderMode::Wrap => Some(Self::wrap(i, len)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BorderMode;

    fn mapped(mode: BorderMode, len: usize) -> Vec<Option<usize>> {
        (-4..len as isize + 4).map(|i| mode.map_index(i, len)).collect()
    }

    #[test]
    fn test_map_index_reflect() {
        assert_eq!(
            mapped(BorderMode::Reflect, 3),
            [2, 2, 1, 0, 0, 1, 2, 2, 1, 0, 0]
                .map(Some)
                .to_vec()
        );
    }

    #[test]
    fn test_map_index_reflect_radius_beyond_len() {
        // the reflected signal has period 2 * len
        for i in -40isize..40 {
            let a = BorderMode::Reflect.map_index(i, 4);
            let b = BorderMode::Reflect.map_index(i + 8, 4);
            assert_eq!(a, b);
        }
        assert_eq!(mapped(BorderMode::Reflect, 1), vec![Some(0); 9]);
    }

    #[test]
    fn test_map_index_reflect101() {
        assert_eq!(
            mapped(BorderMode::Reflect101, 3),
            [0, 1, 2, 1, 0, 1, 2, 1, 0, 1, 2]
                .map(Some)
                .to_vec()
        );
        assert_eq!(mapped(BorderMode::Reflect101, 1), vec![Some(0); 9]);
    }

    #[test]
    fn test_map_index_far_outside() {
        // period 8 for reflect, 6 for reflect101 on a length 4 axis
        let far = 8 * 1_000_003;
        for i in -10isize..10 {
            assert_eq!(
                BorderMode::Reflect.map_index(i - far, 4),
                BorderMode::Reflect.map_index(i, 4)
            );
            assert_eq!(
                BorderMode::Reflect101.map_index(i + 6 * 1_000_003, 4),
                BorderMode::Reflect101.map_index(i, 4)
            );
        }
        assert_eq!(BorderMode::Reflect.map_index(-far - 1, 4), Some(0));
        assert_eq!(BorderMode::Reflect.map_index(far + 4, 4), Some(3));
        assert_eq!(BorderMode::Reflect101.map_index(-6 * 1_000_003 - 1, 4), Some(1));
    }

    #[test]
    fn test_map_index_replicate_wrap_constant() {
        assert_eq!(
            mapped(BorderMode::Replicate, 3),
            [0, 0, 0, 0, 0, 1, 2, 2, 2, 2, 2]
                .map(Some)
                .to_vec()
        );
        assert_eq!(
            mapped(BorderMode::Wrap, 3),
            [2, 0, 1, 2, 0, 1, 2, 0, 1, 2, 0]
                .map(Some)
                .to_vec()
        );
        assert_eq!(
            mapped(BorderMode::Constant, 2),
            vec![None, None, None, None, Some(0), Some(1), None, None, None, None]
        );
    }
}
