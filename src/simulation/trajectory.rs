// Orbit storage with an explicit, fixed-increment growth law
use crate::physics::State;

pub const DEFAULT_CAPACITY: usize = 5000;
pub const DEFAULT_INCREMENT: usize = 5000;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrajectoryError {
    #[error("trajectory store is empty")]
    Empty,
}

/// Append-only history of visited states.
///
/// The buffer always holds `capacity` slots; only the first `count` are
/// visible. When `count` reaches `capacity` the buffer grows by `increment`
/// before the next write, so `count <= capacity` holds at all times.
#[derive(Debug, Clone)]
pub struct Trajectory {
    buffer: Vec<State>,
    count: usize,
    increment: usize,
    growth_events: usize,
}

impl Trajectory {
    pub fn new(initial_capacity: usize, increment: usize) -> Self {
        Self {
            buffer: vec![State::ZERO; initial_capacity],
            count: 0,
            increment: increment.max(1),
            growth_events: 0,
        }
    }

    /// Store seeded with a single starting point
    pub fn seeded(start: State, initial_capacity: usize, increment: usize) -> Self {
        let mut trajectory = Self::new(initial_capacity, increment);
        trajectory.append(start);
        trajectory
    }

    pub fn append(&mut self, point: State) {
        if self.count == self.buffer.len() {
            self.grow();
        }
        self.buffer[self.count] = point;
        self.count += 1;
    }

    fn grow(&mut self) {
        let new_capacity = self.buffer.len() + self.increment;
        log::info!(
            "Increasing orbit storage {} -> {} points",
            self.buffer.len(),
            new_capacity
        );
        self.buffer.resize(new_capacity, State::ZERO);
        self.growth_events += 1;
    }

    /// Logically erase all points. Capacity and old contents are kept.
    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// Most recent point. Callers normally rely on the store being seeded.
    pub fn latest(&self) -> Result<State, TrajectoryError> {
        self.count
            .checked_sub(1)
            .map(|i| self.buffer[i])
            .ok_or(TrajectoryError::Empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = State> + '_ {
        self.buffer[..self.count].iter().copied()
    }

    /// Consecutive point pairs, one per trail segment
    pub fn segments(&self) -> impl Iterator<Item = (State, State)> + '_ {
        self.buffer[..self.count].windows(2).map(|w| (w[0], w[1]))
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn growth_events(&self) -> usize {
        self.growth_events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(i: usize) -> State {
        State::new(i as f64, -(i as f64), 0.5 * i as f64)
    }

    #[test]
    fn test_growth_count_and_order() {
        let mut trajectory = Trajectory::new(10, 4);
        for i in 0..23 {
            trajectory.append(point(i));
        }

        // ceil((23 - 10) / 4) = 4
        assert_eq!(trajectory.growth_events(), 4);
        assert_eq!(trajectory.capacity(), 26);
        assert_eq!(trajectory.len(), 23);
        assert!(trajectory.len() <= trajectory.capacity());

        let collected: Vec<State> = trajectory.iter().collect();
        let expected: Vec<State> = (0..23).map(point).collect();
        assert_eq!(collected, expected);
    }

    #[test]
    fn test_no_growth_until_full() {
        let mut trajectory = Trajectory::new(8, 8);
        for i in 0..8 {
            trajectory.append(point(i));
        }
        assert_eq!(trajectory.growth_events(), 0);
        assert_eq!(trajectory.capacity(), 8);

        trajectory.append(point(8));
        assert_eq!(trajectory.growth_events(), 1);
        assert_eq!(trajectory.capacity(), 16);
    }

    #[test]
    fn test_clear_then_append() {
        let mut trajectory = Trajectory::new(3, 2);
        for i in 0..7 {
            trajectory.append(point(i));
        }
        let capacity = trajectory.capacity();

        trajectory.clear();
        assert!(trajectory.is_empty());
        assert_eq!(trajectory.capacity(), capacity);

        let p = State::new(4.0, 5.0, 6.0);
        trajectory.append(p);
        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory.iter().collect::<Vec<_>>(), vec![p]);
        assert_eq!(trajectory.latest(), Ok(p));
    }

    #[test]
    fn test_latest_on_empty_store() {
        let trajectory = Trajectory::new(4, 4);
        assert_eq!(trajectory.latest(), Err(TrajectoryError::Empty));
    }

    #[test]
    fn test_iteration_is_restartable() {
        let trajectory = {
            let mut t = Trajectory::seeded(point(0), 2, 2);
            t.append(point(1));
            t.append(point(2));
            t
        };
        let first: Vec<State> = trajectory.iter().collect();
        let second: Vec<State> = trajectory.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_segments_pair_neighbours() {
        let mut trajectory = Trajectory::new(4, 4);
        for i in 0..5 {
            trajectory.append(point(i));
        }
        let segments: Vec<(State, State)> = trajectory.segments().collect();
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0], (point(0), point(1)));
        assert_eq!(segments[3], (point(3), point(4)));

        trajectory.clear();
        trajectory.append(point(9));
        assert_eq!(trajectory.segments().count(), 0);
    }
}
