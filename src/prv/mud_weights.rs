/// Mud weight 목록의 최대 항목 수.
pub const MAX_MUD_WEIGHTS: usize = 5;
/// 신규 항목에 채워지는 기본 mud weight [sg].
pub const DEFAULT_MUD_WEIGHT_SG: f64 = 1.20;

/// 시나리오 입력용 mud weight 목록. 계산에는 첫 항목만 쓰인다.
///
/// 목록은 생성 이후 항상 1개 이상으로 유지된다.
#[derive(Debug, Clone)]
pub struct MudWeightSet {
    weights: Vec<f64>,
}

impl Default for MudWeightSet {
    fn default() -> Self {
        Self {
            weights: vec![DEFAULT_MUD_WEIGHT_SG],
        }
    }
}

impl MudWeightSet {
    /// 기본값 한 항목으로 초기화한 목록을 만든다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 기본값 항목을 하나 추가한다. 최대 개수에 도달했으면 false.
    pub fn add(&mut self) -> bool {
        if self.weights.len() >= MAX_MUD_WEIGHTS {
            return false;
        }
        self.weights.push(DEFAULT_MUD_WEIGHT_SG);
        true
    }

    /// index 위치의 값을 갱신한다. 범위를 벗어나면 false.
    pub fn update(&mut self, index: usize, value_sg: f64) -> bool {
        match self.weights.get_mut(index) {
            Some(slot) => {
                *slot = value_sg;
                true
            }
            None => false,
        }
    }

    /// index 위치의 항목을 제거한다. 마지막 한 항목은 제거할 수 없다.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.weights.len() <= 1 || index >= self.weights.len() {
            return false;
        }
        self.weights.remove(index);
        true
    }

    /// 계산에 참여하는 첫 항목 값을 반환한다.
    pub fn primary(&self) -> f64 {
        self.weights[0]
    }

    pub fn values(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.weights.len() >= MAX_MUD_WEIGHTS
    }
}
