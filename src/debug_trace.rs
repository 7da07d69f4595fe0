// NOTE: with tracing disabled every arm still borrows its arguments, so
// bindings used only for tracing don't trigger unused variable warnings.
macro_rules! trace {
    ( @token $token:expr ) => {
        #[cfg(feature = "debug_trace")]
        {
            let token = &$token;

            println!(
                ">consume {:?} @{}: {:?}",
                token.kind(),
                token.offset(),
                token.text()
            );
        }

        #[cfg(not(feature = "debug_trace"))]
        let _ = &$token;
    };

    ( @backup $token:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!("<backup {:?} @{}", $token.kind(), $token.offset());

        #[cfg(not(feature = "debug_trace"))]
        let _ = &$token;
    };

    ( @state $from:expr => $to:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!("@state: {:?} -> {:?}", $from, $to);
    };

    ( @output $element:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!("@output: {:#?}", $element);
    };

    ( @finalize $state:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!("@finalize: end of stream in {:?}", $state);
    };
}
