//! Decorator: wrap a value in another that implements the same trait and
//! adds to its behavior. Decorators nest in any order and any depth.

pub trait Coffee {
    fn cost(&self) -> f64;
    fn description(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn cost(&self) -> f64 {
        1.0
    }

    fn description(&self) -> String {
        "Simple coffee".to_string()
    }
}

// Decorator: milk
pub struct MilkDecorator {
    wrapped: Box<dyn Coffee>,
}

impl MilkDecorator {
    pub fn new(wrapped: Box<dyn Coffee>) -> Self {
        Self { wrapped }
    }
}

impl Coffee for MilkDecorator {
    fn cost(&self) -> f64 {
        self.wrapped.cost() + 0.5
    }

    fn description(&self) -> String {
        format!("{}, milk", self.wrapped.description())
    }
}

// Decorator: sugar
pub struct SugarDecorator {
    wrapped: Box<dyn Coffee>,
}

impl SugarDecorator {
    pub fn new(wrapped: Box<dyn Coffee>) -> Self {
        Self { wrapped }
    }
}

impl Coffee for SugarDecorator {
    fn cost(&self) -> f64 {
        self.wrapped.cost() + 0.2
    }

    fn description(&self) -> String {
        format!("{}, sugar", self.wrapped.description())
    }
}

// Decorator: whipped cream
pub struct WhipDecorator {
    wrapped: Box<dyn Coffee>,
}

impl WhipDecorator {
    pub fn new(wrapped: Box<dyn Coffee>) -> Self {
        Self { wrapped }
    }
}

impl Coffee for WhipDecorator {
    fn cost(&self) -> f64 {
        self.wrapped.cost() + 0.7
    }

    fn description(&self) -> String {
        format!("{}, whip", self.wrapped.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_simple_coffee() {
        assert!(close(SimpleCoffee.cost(), 1.0));
        assert_eq!(SimpleCoffee.description(), "Simple coffee");
    }

    #[test]
    fn test_milk_and_sugar() {
        let coffee = SugarDecorator::new(Box::new(MilkDecorator::new(Box::new(SimpleCoffee))));
        assert!(close(coffee.cost(), 1.7));
        assert_eq!(coffee.description(), "Simple coffee, milk, sugar");
    }

    #[test]
    fn test_stacking_is_cumulative() {
        let mut coffee: Box<dyn Coffee> = Box::new(SimpleCoffee);
        coffee = Box::new(WhipDecorator::new(coffee));
        coffee = Box::new(MilkDecorator::new(coffee));
        coffee = Box::new(MilkDecorator::new(coffee));
        assert!(close(coffee.cost(), 2.7));
        assert_eq!(coffee.description(), "Simple coffee, whip, milk, milk");
    }
}
