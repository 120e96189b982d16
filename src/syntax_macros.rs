//! Constructor sugar for the tuple family.
//!
//! `tuple!(a, b, c)` picks the concrete arity (`Tuple3::new(a, b, c)`), and
//! past sixteen values nests a [`TupleRest`](crate::tuple::rest::TupleRest)
//! automatically, recursing until the tail fits a fixed arity.

/// Builds the structural tuple matching the number of supplied values.
///
/// One through sixteen expressions produce `Tuple1..Tuple16`; seventeen or
/// more produce a `TupleRest` whose `rest` is built from the remaining
/// values, recursively.
///
/// ```
/// use polyad::tuple;
///
/// let pair = tuple!(1, "a");
/// assert_eq!(pair.item2, "a");
///
/// let wide = tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17);
/// assert_eq!(wide.rest.item2, 17);
/// ```
#[macro_export]
macro_rules! tuple {
    ($v1:expr $(,)?) => {
        $crate::Tuple1::new($v1)
    };
    ($v1:expr, $v2:expr $(,)?) => {
        $crate::Tuple2::new($v1, $v2)
    };
    ($v1:expr, $v2:expr, $v3:expr $(,)?) => {
        $crate::Tuple3::new($v1, $v2, $v3)
    };
    ($v1:expr, $v2:expr, $v3:expr, $v4:expr $(,)?) => {
        $crate::Tuple4::new($v1, $v2, $v3, $v4)
    };
    ($v1:expr, $v2:expr, $v3:expr, $v4:expr, $v5:expr $(,)?) => {
        $crate::Tuple5::new($v1, $v2, $v3, $v4, $v5)
    };
    ($v1:expr, $v2:expr, $v3:expr, $v4:expr, $v5:expr, $v6:expr $(,)?) => {
        $crate::Tuple6::new($v1, $v2, $v3, $v4, $v5, $v6)
    };
    ($v1:expr, $v2:expr, $v3:expr, $v4:expr, $v5:expr, $v6:expr, $v7:expr $(,)?) => {
        $crate::Tuple7::new($v1, $v2, $v3, $v4, $v5, $v6, $v7)
    };
    ($v1:expr, $v2:expr, $v3:expr, $v4:expr, $v5:expr, $v6:expr, $v7:expr, $v8:expr $(,)?) => {
        $crate::Tuple8::new($v1, $v2, $v3, $v4, $v5, $v6, $v7, $v8)
    };
    ($v1:expr, $v2:expr, $v3:expr, $v4:expr, $v5:expr, $v6:expr, $v7:expr, $v8:expr,
     $v9:expr $(,)?) => {
        $crate::Tuple9::new($v1, $v2, $v3, $v4, $v5, $v6, $v7, $v8, $v9)
    };
    ($v1:expr, $v2:expr, $v3:expr, $v4:expr, $v5:expr, $v6:expr, $v7:expr, $v8:expr,
     $v9:expr, $v10:expr $(,)?) => {
        $crate::Tuple10::new($v1, $v2, $v3, $v4, $v5, $v6, $v7, $v8, $v9, $v10)
    };
    ($v1:expr, $v2:expr, $v3:expr, $v4:expr, $v5:expr, $v6:expr, $v7:expr, $v8:expr,
     $v9:expr, $v10:expr, $v11:expr $(,)?) => {
        $crate::Tuple11::new($v1, $v2, $v3, $v4, $v5, $v6, $v7, $v8, $v9, $v10, $v11)
    };
    ($v1:expr, $v2:expr, $v3:expr, $v4:expr, $v5:expr, $v6:expr, $v7:expr, $v8:expr,
     $v9:expr, $v10:expr, $v11:expr, $v12:expr $(,)?) => {
        $crate::Tuple12::new($v1, $v2, $v3, $v4, $v5, $v6, $v7, $v8, $v9, $v10, $v11, $v12)
    };
    ($v1:expr, $v2:expr, $v3:expr, $v4:expr, $v5:expr, $v6:expr, $v7:expr, $v8:expr,
     $v9:expr, $v10:expr, $v11:expr, $v12:expr, $v13:expr $(,)?) => {
        $crate::Tuple13::new($v1, $v2, $v3, $v4, $v5, $v6, $v7, $v8, $v9, $v10, $v11, $v12, $v13)
    };
    ($v1:expr, $v2:expr, $v3:expr, $v4:expr, $v5:expr, $v6:expr, $v7:expr, $v8:expr,
     $v9:expr, $v10:expr, $v11:expr, $v12:expr, $v13:expr, $v14:expr $(,)?) => {
        $crate::Tuple14::new(
            $v1, $v2, $v3, $v4, $v5, $v6, $v7, $v8, $v9, $v10, $v11, $v12, $v13, $v14,
        )
    };
    ($v1:expr, $v2:expr, $v3:expr, $v4:expr, $v5:expr, $v6:expr, $v7:expr, $v8:expr,
     $v9:expr, $v10:expr, $v11:expr, $v12:expr, $v13:expr, $v14:expr, $v15:expr $(,)?) => {
        $crate::Tuple15::new(
            $v1, $v2, $v3, $v4, $v5, $v6, $v7, $v8, $v9, $v10, $v11, $v12, $v13, $v14, $v15,
        )
    };
    ($v1:expr, $v2:expr, $v3:expr, $v4:expr, $v5:expr, $v6:expr, $v7:expr, $v8:expr,
     $v9:expr, $v10:expr, $v11:expr, $v12:expr, $v13:expr, $v14:expr, $v15:expr,
     $v16:expr $(,)?) => {
        $crate::Tuple16::new(
            $v1, $v2, $v3, $v4, $v5, $v6, $v7, $v8, $v9, $v10, $v11, $v12, $v13, $v14, $v15, $v16,
        )
    };
    // 17+ values: keep 16 in the head and recurse on the remainder.
    ($v1:expr, $v2:expr, $v3:expr, $v4:expr, $v5:expr, $v6:expr, $v7:expr, $v8:expr,
     $v9:expr, $v10:expr, $v11:expr, $v12:expr, $v13:expr, $v14:expr, $v15:expr,
     $v16:expr, $($rest:expr),+ $(,)?) => {
        $crate::TupleRest::new(
            $v1, $v2, $v3, $v4, $v5, $v6, $v7, $v8, $v9, $v10, $v11, $v12, $v13, $v14, $v15, $v16,
            $crate::tuple!($($rest),+),
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::Tuple;

    #[test]
    fn picks_the_concrete_arity() {
        let three = tuple!(1, 2, 3);
        assert_eq!(three.arity(), 3);
        assert_eq!((three.item1, three.item2, three.item3), (1, 2, 3));
    }

    #[test]
    fn trailing_comma_is_accepted() {
        let two = tuple!(1, 2,);
        assert_eq!(two.arity(), 2);
    }

    #[test]
    fn nests_rest_past_sixteen() {
        let wide = tuple!(1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18);
        assert_eq!(wide.arity(), 18);
        assert_eq!(wide.item16, 16);
        assert_eq!(wide.rest.item1, 17);
        assert_eq!(wide.rest.item2, 18);
    }
}
